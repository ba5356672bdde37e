//! 스캔 결과에 대한 시장 코멘터리 생성.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - `TextGenerator` trait: 프롬프트 → 자유 텍스트
//! - Gemini(Generative Language API) 클라이언트
//! - 스캔 일치 결과용 프롬프트 작성기

pub mod gemini;
pub mod prompt;
pub mod service;
pub mod types;

pub use gemini::{GeminiClient, GeminiConfig, GEMINI_API_KEY_ENV, GEMINI_API_KEY_HEADER};
pub use prompt::build_prompt;
pub use service::CommentaryService;
pub use types::*;
