//! 스캔 일치 결과에 대한 코멘터리 서비스.

use crate::gemini::GeminiClient;
use crate::prompt::build_prompt;
use crate::types::{CommentaryResult, TextGenerator};
use scanner_core::{CommentaryConfig, ScanMatch};
use std::sync::Arc;
use tracing::info;

/// 텍스트 생성기를 감싸 스캔 일치 결과를 코멘터리로 변환합니다.
#[derive(Clone)]
pub struct CommentaryService {
    generator: Arc<dyn TextGenerator>,
}

impl CommentaryService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// 환경 변수의 API 키로 Gemini 기반 서비스를 생성합니다.
    pub fn from_env(settings: &CommentaryConfig) -> CommentaryResult<Self> {
        Ok(Self::new(Arc::new(GeminiClient::from_env(settings)?)))
    }

    /// 코멘터리 대상인지 확인합니다. 돌파 단계만 대상입니다.
    pub fn is_eligible(signal: &ScanMatch) -> bool {
        signal.phase.is_breakout()
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// 일치 결과에 대한 코멘터리를 생성합니다.
    pub async fn commentary(&self, signal: &ScanMatch) -> CommentaryResult<String> {
        info!(
            instrument = %signal.instrument,
            generator = self.generator.name(),
            "Generating commentary"
        );
        self.generator.generate(&build_prompt(signal)).await
    }
}

impl std::fmt::Debug for CommentaryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommentaryService")
            .field("generator", &self.generator.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommentaryError;
    use async_trait::async_trait;
    use scanner_core::{MarketType, PatternKind, Phase, Timeframe};
    use std::sync::Mutex;

    struct EchoGenerator {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, prompt: &str) -> CommentaryResult<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("- Neutral sentiment".to_string())
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> CommentaryResult<String> {
            Err(CommentaryError::EmptyResponse)
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn signal(phase: Phase) -> ScanMatch {
        ScanMatch {
            exchange: "Binance".to_string(),
            market: MarketType::Spot,
            instrument: "SOLUSDT".to_string(),
            timeframe: Timeframe::D1,
            pattern: PatternKind::DoubleBottom,
            phase,
            description: "Double bottom breakout above neckline 150.0000".to_string(),
        }
    }

    #[test]
    fn test_only_breakouts_are_eligible() {
        assert!(CommentaryService::is_eligible(&signal(Phase::BreakoutUp)));
        assert!(CommentaryService::is_eligible(&signal(Phase::BreakoutDown)));
        assert!(!CommentaryService::is_eligible(&signal(Phase::Forming)));
    }

    #[tokio::test]
    async fn test_commentary_uses_prompt() {
        let generator = Arc::new(EchoGenerator {
            prompts: Mutex::new(Vec::new()),
        });
        let service = CommentaryService::new(generator.clone());

        let text = service.commentary(&signal(Phase::BreakoutUp)).await.unwrap();

        assert_eq!(text, "- Neutral sentiment");
        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("SOLUSDT"));
    }

    #[tokio::test]
    async fn test_generator_errors_propagate() {
        let service = CommentaryService::new(Arc::new(FailingGenerator));
        let err = service.commentary(&signal(Phase::BreakoutUp)).await.unwrap_err();
        assert!(matches!(err, CommentaryError::EmptyResponse));
    }
}
