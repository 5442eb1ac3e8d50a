//! Instruction template shared by every remote backend, and the checks
//! applied to whatever text comes back.

use crate::{GenerationError, GenerationResult};

/// Prefix of a provider failure that was serialized as if it were an answer
pub const APOLOGY_SENTINEL: &str = "抱歉，";

pub const PERSONA: &str = "你是一个擅长用批判性、机智幽默的方式解读中文词语的AI。\
你的风格类似于王尔德、鲁迅和骆永华的结合，善于使用隐喻和讽刺。";

const OPENING_QUOTES: &[char] = &['"', '\'', '“', '‘', '「', '『'];

pub fn instruction(word: &str) -> String {
    format!(
        "请用一句话解释'{word}'这个词，要求：\n\
         1. 批判性地解读这个词背后的社会现象\n\
         2. 使用机智幽默的语言\n\
         3. 可以使用隐喻和讽刺\n\
         4. 长度在50字以内\n\
         5. 不要在回答两端加引号"
    )
}

/// Persona and instruction in one turn, for backends without a system role
pub fn single_turn(word: &str) -> String {
    format!("{PERSONA}\n{}", instruction(word))
}

/// Accept generated text only if it is a real interpretation
pub fn validate_text(text: &str) -> GenerationResult {
    let text = text.trim();

    if text.is_empty() {
        return Err(GenerationError::MalformedResponse(
            "empty interpretation".to_string(),
        ));
    }

    if text
        .trim_start_matches(OPENING_QUOTES)
        .starts_with(APOLOGY_SENTINEL)
    {
        return Err(GenerationError::MalformedResponse(format!(
            "provider returned an apology instead of an interpretation: {text}"
        )));
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_embeds_word() {
        let prompt = instruction("内卷");
        assert!(prompt.contains("'内卷'"));
        assert!(prompt.contains("50字以内"));
    }

    #[test]
    fn test_single_turn_carries_persona() {
        let prompt = single_turn("内卷");
        assert!(prompt.starts_with(PERSONA));
        assert!(prompt.contains("王尔德、鲁迅和骆永华"));
        assert!(prompt.ends_with("不要在回答两端加引号"));
    }

    #[test]
    fn test_validate_text_trims() {
        assert_eq!(
            validate_text("  会议是集体浪费时间的艺术。\n").unwrap(),
            "会议是集体浪费时间的艺术。"
        );
    }

    #[test]
    fn test_validate_text_rejects_empty() {
        assert!(matches!(
            validate_text(" \n "),
            Err(GenerationError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_validate_text_rejects_sentinel() {
        assert!(validate_text("抱歉，生成解释时出现错误：timeout").is_err());
        assert!(validate_text("“抱歉，API 调用失败”").is_err());
        assert!(validate_text("不必抱歉，这就是生活。").is_ok());
    }
}
