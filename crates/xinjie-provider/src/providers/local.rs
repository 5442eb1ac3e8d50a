use std::collections::HashMap;

use async_trait::async_trait;

use crate::{GenerationResult, Provider, ProviderMetadata};

/// Offline generator backed by hand-written interpretations.
///
/// Total: every word gets a non-empty sentence, which makes it the
/// fallback of last resort for every remote backend.
pub struct LocalProvider {
    interpretations: HashMap<&'static str, &'static str>,
}

impl LocalProvider {
    pub fn new() -> Self {
        let interpretations = HashMap::from([
            ("委婉", "刺向他人时, 决定在剑刃上撒上止痛药。"),
            ("效率", "用最快的速度完成错误的事情。"),
            ("会议", "一群人坐在一起，互相浪费时间的艺术。"),
            ("加班", "用生命为资本家的游艇添砖加瓦。"),
            ("团建", "强制性的快乐，预算内的友谊。"),
            (
                "出人头地",
                "在一个人人低头的时代，有人选择抬起头来 —— 然后发现自己成了靶子。",
            ),
        ]);

        Self { interpretations }
    }

    /// Interpretation for `word`, hand-written if known, templated otherwise
    pub fn interpret(&self, word: &str) -> String {
        match self.interpretations.get(word) {
            Some(text) => text.to_string(),
            None => format!(
                "在这个荒诞的世界里，'{word}'不过是一个美丽的谎言，我们都在用它来粉饰太平，掩盖真相。"
            ),
        }
    }
}

impl Default for LocalProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provider for LocalProvider {
    async fn generate(&self, word: &str) -> GenerationResult {
        Ok(self.interpret(word))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Local".to_string(),
            model: "builtin".to_string(),
            requires_api_key: false,
        }
    }
}
