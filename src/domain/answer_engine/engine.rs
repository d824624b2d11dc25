//! The bounded round loop.

use std::sync::Arc;

use crate::domain::tools::{ToolDefinition, ToolResult};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, Message, MessageRole,
    ToolDispatcher,
};

use super::{build_system_content, EngineState};

/// Answer returned when the LLM wants tools but nothing can run them.
pub const NO_DISPATCHER_FALLBACK: &str = "Tool use requested but no tool dispatcher is available";

/// Tuning for the answer engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Rounds of tool use allowed before the forced final call.
    pub max_tool_rounds: u32,
    /// Sampling temperature (0.0 = deterministic).
    pub temperature: f32,
    /// Response length cap, large enough for a full course outline.
    pub max_tokens: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_tool_rounds: 2,
            temperature: 0.0,
            max_tokens: 1500,
        }
    }
}

/// Produces one final answer per question using at most
/// `max_tool_rounds + 1` LLM calls.
///
/// The engine holds no citation state. Tools record citations through the
/// dispatcher, and the caller drains them.
pub struct AnswerEngine {
    provider: Arc<dyn AIProvider>,
    config: EngineConfig,
}

impl AnswerEngine {
    pub fn new(provider: Arc<dyn AIProvider>, config: EngineConfig) -> Self {
        Self { provider, config }
    }

    /// Answers `question`, letting the LLM use `tools` through `dispatcher`.
    ///
    /// # Errors
    ///
    /// Only LLM invocation failures. Tool failures become result text.
    pub async fn answer(
        &self,
        question: &str,
        history: Option<&str>,
        tools: Option<&[ToolDefinition]>,
        dispatcher: Option<&dyn ToolDispatcher>,
    ) -> Result<String, AIError> {
        let system = build_system_content(history);
        let tools: Vec<ToolDefinition> = tools.map(<[_]>::to_vec).unwrap_or_default();
        let mut messages = vec![Message::user(question)];
        let mut state = EngineState::initial(self.config.max_tool_rounds);

        loop {
            state = match state {
                EngineState::Reasoning { rounds_completed } => {
                    tracing::debug!(
                        round = rounds_completed + 1,
                        "Requesting completion with tools"
                    );
                    let response = self
                        .complete(&system, &messages, Some(tools.as_slice()))
                        .await?;
                    self.after_completion(response, rounds_completed, dispatcher, &mut messages)
                }

                EngineState::Retrieving {
                    rounds_completed,
                    calls,
                } => {
                    // `Retrieving` is only entered with a dispatcher present.
                    let Some(dispatcher) = dispatcher else {
                        return Ok(NO_DISPATCHER_FALLBACK.to_string());
                    };

                    let mut results = Vec::with_capacity(calls.len());
                    for call in &calls {
                        tracing::debug!(
                            tool = %call.tool_name(),
                            call_id = %call.call_id(),
                            "Dispatching tool"
                        );
                        let content = match dispatcher.execute_call(call).await {
                            Ok(output) => output,
                            Err(err) => {
                                tracing::warn!(
                                    tool = %call.tool_name(),
                                    call_id = %call.call_id(),
                                    error = %err,
                                    "Tool dispatch failed"
                                );
                                format!("Error executing tool: {}", err)
                            }
                        };
                        results.push(ToolResult::for_request(call, content));
                    }

                    if !results.is_empty() {
                        messages.push(Message::tool_results(results));
                    }

                    EngineState::after_round(rounds_completed + 1, self.config.max_tool_rounds)
                }

                EngineState::Exhausted => {
                    tracing::debug!(
                        rounds = self.config.max_tool_rounds,
                        "Round limit reached, forcing final answer without tools"
                    );
                    let response = self.complete(&system, &messages, None).await?;
                    tracing::info!(
                        stop_reason = %response.stop_reason,
                        "Answer engine finished after forced final call"
                    );
                    EngineState::Terminated(response.text_content())
                }

                EngineState::Terminated(answer) => return Ok(answer),
            };
        }
    }

    /// Decides what follows a completion made with tools offered.
    fn after_completion(
        &self,
        response: CompletionResponse,
        rounds_completed: u32,
        dispatcher: Option<&dyn ToolDispatcher>,
        messages: &mut Vec<Message>,
    ) -> EngineState {
        if !response.requests_tools() {
            tracing::info!(
                round = rounds_completed + 1,
                stop_reason = %response.stop_reason,
                "Answer engine finished"
            );
            return EngineState::Terminated(response.text_content());
        }

        if dispatcher.is_none() {
            tracing::warn!("Tool use requested without a dispatcher");
            let text = response.text_content();
            return EngineState::Terminated(if text.is_empty() {
                NO_DISPATCHER_FALLBACK.to_string()
            } else {
                text
            });
        }

        let calls = response.tool_calls().into_iter().cloned().collect();
        messages.push(Message::blocks(MessageRole::Assistant, response.content));
        EngineState::Retrieving {
            rounds_completed,
            calls,
        }
    }

    async fn complete(
        &self,
        system: &str,
        messages: &[Message],
        tools: Option<&[ToolDefinition]>,
    ) -> Result<CompletionResponse, AIError> {
        let mut request = CompletionRequest::new()
            .with_messages(messages.to_vec())
            .with_system_prompt(system)
            .with_max_tokens(self.config.max_tokens)
            .with_temperature(self.config.temperature);

        if let Some(tools) = tools.filter(|tools| !tools.is_empty()) {
            request = request.with_tools(tools.to_vec());
        }

        self.provider.complete(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tools::{ToolCallRequest, ToolError};
    use crate::ports::{ContentBlock, MessageContent, ProviderInfo, StopReason, TokenUsage};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Test Infrastructure
    // ════════════════════════════════════════════════════════════════════════════

    /// Replays scripted responses and records every request.
    struct ScriptedProvider {
        responses: Mutex<VecDeque<Result<CompletionResponse, AIError>>>,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedProvider {
        fn new(responses: Vec<Result<CompletionResponse, AIError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<CompletionRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AIProvider for ScriptedProvider {
        async fn complete(
            &self,
            request: CompletionRequest,
        ) -> Result<CompletionResponse, AIError> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(CompletionResponse::text("script exhausted")))
        }

        fn provider_info(&self) -> ProviderInfo {
            ProviderInfo::new("scripted", "scripted-1", 100_000)
        }
    }

    /// Records dispatched calls; fails for tools named "broken".
    #[derive(Default)]
    struct RecordingDispatcher {
        calls: Mutex<Vec<ToolCallRequest>>,
    }

    impl RecordingDispatcher {
        fn calls(&self) -> Vec<ToolCallRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ToolDispatcher for RecordingDispatcher {
        async fn execute_call(&self, call: &ToolCallRequest) -> Result<String, ToolError> {
            self.calls.lock().unwrap().push(call.clone());
            match call.tool_name() {
                "broken" => Err(ToolError::execution("index offline")),
                "search_course_content" | "get_course_outline" => {
                    Ok(format!("result for {}", call.call_id()))
                }
                other => Err(ToolError::UnknownTool(other.to_string())),
            }
        }
    }

    fn call(id: &str, tool: &str) -> ToolCallRequest {
        ToolCallRequest::new(id, tool, serde_json::json!({"query": "q"}))
    }

    fn tools() -> Vec<ToolDefinition> {
        vec![
            ToolDefinition::simple("search_course_content", "Search"),
            ToolDefinition::simple("get_course_outline", "Outline"),
        ]
    }

    fn engine(provider: Arc<ScriptedProvider>) -> AnswerEngine {
        AnswerEngine::new(provider, EngineConfig::default())
    }

    fn tool_results_in(message: &Message) -> Vec<ToolResult> {
        match &message.content {
            MessageContent::Blocks(blocks) => blocks
                .iter()
                .filter_map(|block| match block {
                    ContentBlock::ToolResult(result) => Some(result.clone()),
                    _ => None,
                })
                .collect(),
            MessageContent::Text(_) => Vec::new(),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn default_config_matches_production_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.max_tool_rounds, 2);
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.max_tokens, 1500);
    }

    #[tokio::test]
    async fn direct_answer_uses_one_call_and_no_dispatch() {
        let provider = ScriptedProvider::new(vec![Ok(CompletionResponse::text("Paris"))]);
        let dispatcher = RecordingDispatcher::default();
        let definitions = tools();

        let answer = engine(provider.clone())
            .answer(
                "Capital of France?",
                None,
                Some(&definitions),
                Some(&dispatcher),
            )
            .await
            .unwrap();

        assert_eq!(answer, "Paris");
        assert_eq!(provider.requests().len(), 1);
        assert!(dispatcher.calls().is_empty());
    }

    #[tokio::test]
    async fn request_carries_prompt_history_and_constants() {
        let provider = ScriptedProvider::new(vec![Ok(CompletionResponse::text("ok"))]);
        let definitions = tools();

        engine(provider.clone())
            .answer(
                "q",
                Some("User: hi\nAssistant: hello"),
                Some(&definitions),
                None,
            )
            .await
            .unwrap();

        let request = &provider.requests()[0];
        let system = request.system_prompt.as_deref().unwrap();
        assert!(system.ends_with("Previous conversation:\nUser: hi\nAssistant: hello"));
        assert_eq!(request.temperature, Some(0.0));
        assert_eq!(request.max_tokens, Some(1500));
        assert_eq!(request.tools.len(), 2);
        assert_eq!(request.messages, vec![Message::user("q")]);
    }

    #[tokio::test]
    async fn without_catalog_no_tools_are_offered() {
        let provider = ScriptedProvider::new(vec![Ok(CompletionResponse::text("ok"))]);

        engine(provider.clone())
            .answer("q", None, None, None)
            .await
            .unwrap();

        let request = &provider.requests()[0];
        assert!(!request.has_tools());
        assert_eq!(request.tool_choice, None);
    }

    #[tokio::test]
    async fn every_requested_call_is_dispatched_in_order() {
        let provider = ScriptedProvider::new(vec![
            Ok(CompletionResponse::tool_use(vec![
                call("t1", "search_course_content"),
                call("t2", "get_course_outline"),
                call("t3", "search_course_content"),
            ])),
            Ok(CompletionResponse::text("combined answer")),
        ]);
        let dispatcher = RecordingDispatcher::default();
        let definitions = tools();

        let answer = engine(provider.clone())
            .answer("q", None, Some(&definitions), Some(&dispatcher))
            .await
            .unwrap();

        assert_eq!(answer, "combined answer");
        let ids: Vec<String> = dispatcher
            .calls()
            .iter()
            .map(|c| c.call_id().to_string())
            .collect();
        assert_eq!(ids, vec!["t1", "t2", "t3"]);

        let second = &provider.requests()[1];
        assert_eq!(second.messages.len(), 3);
        assert_eq!(second.messages[1].role, MessageRole::Assistant);
        let results = tool_results_in(&second.messages[2]);
        let result_ids: Vec<&str> = results.iter().map(|r| r.call_id()).collect();
        assert_eq!(result_ids, vec!["t1", "t2", "t3"]);
        assert_eq!(results[1].content(), "result for t2");
    }

    #[tokio::test]
    async fn two_rounds_then_answer_uses_three_calls() {
        let provider = ScriptedProvider::new(vec![
            Ok(CompletionResponse::tool_use(vec![call("t1", "get_course_outline")])),
            Ok(CompletionResponse::tool_use(vec![call("t2", "search_course_content")])),
            Ok(CompletionResponse::text("final")),
        ]);
        let dispatcher = RecordingDispatcher::default();
        let definitions = tools();

        let answer = engine(provider.clone())
            .answer("q", None, Some(&definitions), Some(&dispatcher))
            .await
            .unwrap();

        assert_eq!(answer, "final");
        let requests = provider.requests();
        assert_eq!(requests.len(), 3);
        assert!(requests[0].has_tools());
        assert!(requests[1].has_tools());
        assert!(!requests[2].has_tools());
        assert_eq!(dispatcher.calls().len(), 2);
    }

    #[tokio::test]
    async fn forced_final_call_is_returned_even_if_it_asks_for_tools() {
        let mut stubborn = CompletionResponse::tool_use(vec![call("t3", "search_course_content")]);
        stubborn
            .content
            .insert(0, ContentBlock::text("best effort"));
        let provider = ScriptedProvider::new(vec![
            Ok(CompletionResponse::tool_use(vec![call("t1", "search_course_content")])),
            Ok(CompletionResponse::tool_use(vec![call("t2", "search_course_content")])),
            Ok(stubborn),
            Ok(CompletionResponse::text("never requested")),
        ]);
        let dispatcher = RecordingDispatcher::default();
        let definitions = tools();

        let answer = engine(provider.clone())
            .answer("q", None, Some(&definitions), Some(&dispatcher))
            .await
            .unwrap();

        assert_eq!(answer, "best effort");
        assert_eq!(provider.requests().len(), 3);
        assert_eq!(dispatcher.calls().len(), 2);
    }

    #[tokio::test]
    async fn final_call_keeps_full_exchange() {
        let provider = ScriptedProvider::new(vec![
            Ok(CompletionResponse::tool_use(vec![call("t1", "search_course_content")])),
            Ok(CompletionResponse::tool_use(vec![call("t2", "search_course_content")])),
            Ok(CompletionResponse::text("final")),
        ]);
        let dispatcher = RecordingDispatcher::default();
        let definitions = tools();

        engine(provider.clone())
            .answer("q", None, Some(&definitions), Some(&dispatcher))
            .await
            .unwrap();

        let last = provider.requests().pop().unwrap();
        assert_eq!(last.messages.len(), 5);
        assert_eq!(last.tool_choice, None);
    }

    #[tokio::test]
    async fn missing_dispatcher_returns_accompanying_text() {
        let mut response = CompletionResponse::tool_use(vec![call("t1", "search_course_content")]);
        response.content.insert(0, ContentBlock::text("Let me look that up."));
        let provider = ScriptedProvider::new(vec![Ok(response)]);
        let definitions = tools();

        let answer = engine(provider.clone())
            .answer("q", None, Some(&definitions), None)
            .await
            .unwrap();

        assert_eq!(answer, "Let me look that up.");
        assert_eq!(provider.requests().len(), 1);
    }

    #[tokio::test]
    async fn missing_dispatcher_without_text_returns_fallback() {
        let provider = ScriptedProvider::new(vec![Ok(CompletionResponse::tool_use(vec![call(
            "t1",
            "search_course_content",
        )]))]);
        let definitions = tools();

        let answer = engine(provider)
            .answer("q", None, Some(&definitions), None)
            .await
            .unwrap();

        assert_eq!(answer, NO_DISPATCHER_FALLBACK);
    }

    #[tokio::test]
    async fn dispatch_failures_become_error_results() {
        let provider = ScriptedProvider::new(vec![
            Ok(CompletionResponse::tool_use(vec![
                call("t1", "web_search"),
                call("t2", "broken"),
            ])),
            Ok(CompletionResponse::text("sorry")),
        ]);
        let dispatcher = RecordingDispatcher::default();
        let definitions = tools();

        let answer = engine(provider.clone())
            .answer("q", None, Some(&definitions), Some(&dispatcher))
            .await
            .unwrap();

        assert_eq!(answer, "sorry");
        let results = tool_results_in(&provider.requests()[1].messages[2]);
        assert_eq!(
            results[0].content(),
            "Error executing tool: Tool 'web_search' not found"
        );
        assert!(results[1].content().starts_with("Error executing tool:"));
        assert!(results[1].content().contains("index offline"));
    }

    #[tokio::test]
    async fn tool_use_without_calls_adds_no_results_message() {
        let empty_tool_use = CompletionResponse {
            content: vec![ContentBlock::text("thinking")],
            stop_reason: StopReason::ToolUse,
            usage: TokenUsage::zero(),
            model: "scripted-1".to_string(),
        };
        let provider = ScriptedProvider::new(vec![
            Ok(empty_tool_use),
            Ok(CompletionResponse::text("done")),
        ]);
        let dispatcher = RecordingDispatcher::default();
        let definitions = tools();

        engine(provider.clone())
            .answer("q", None, Some(&definitions), Some(&dispatcher))
            .await
            .unwrap();

        assert_eq!(provider.requests()[1].messages.len(), 2);
    }

    #[tokio::test]
    async fn provider_errors_propagate() {
        let provider = ScriptedProvider::new(vec![Err(AIError::AuthenticationFailed)]);

        let err = engine(provider)
            .answer("q", None, None, None)
            .await
            .unwrap_err();

        assert_eq!(err, AIError::AuthenticationFailed);
    }

    #[tokio::test]
    async fn zero_round_limit_answers_without_tools() {
        let provider = ScriptedProvider::new(vec![Ok(CompletionResponse::text("plain"))]);
        let config = EngineConfig {
            max_tool_rounds: 0,
            ..EngineConfig::default()
        };
        let definitions = tools();

        let answer = AnswerEngine::new(provider.clone(), config)
            .answer("q", None, Some(&definitions), None)
            .await
            .unwrap();

        assert_eq!(answer, "plain");
        assert!(!provider.requests()[0].has_tools());
    }
}
