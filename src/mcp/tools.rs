//! MCP tool definitions and dispatch.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use super::protocol::{
    JsonRpcRequest, JsonRpcResponse, MCP_PROTOCOL_VERSION, METHOD_NOT_FOUND, SERVER_NAME,
};
use crate::envelope::ErrorReply;
use crate::service::{
    CustomizeRequest, HelperService, MarriageRequest, Reply, ResponseRequest, SimilarRequest,
};
use crate::utilities::errors::HelperError;

const STYLE_ENUM: [&str; 5] = ["humorous", "witty", "polite", "reverse", "wise"];

/// `tools/list` result.
pub fn tool_definitions() -> Value {
    json!({
        "tools": [
            {
                "name": "generate_marriage_response",
                "description": "결혼 관련 질문에 대한 답변을 생성합니다. Answers a marriage question (\"결혼은 언제 하니?\", \"소개팅 안 해?\") in the chosen style.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "question": { "type": "string", "description": "친척이 한 질문" },
                        "style": { "type": "string", "enum": STYLE_ENUM, "default": "humorous" }
                    },
                    "required": ["question"]
                }
            },
            {
                "name": "generate_response",
                "description": "명절 질문에 대한 답변을 생성합니다 (모든 카테고리). Detects the category unless one is given, matches the closest known question and renders the answer.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "question": { "type": "string", "description": "친척이 한 질문" },
                        "style": { "type": "string", "enum": STYLE_ENUM, "default": "humorous" },
                        "category": {
                            "type": "string",
                            "description": "auto, marriage, childbirth, job, study, appearance, age",
                            "default": "auto"
                        },
                        "include_similar": { "type": "boolean", "default": false },
                        "situation": {
                            "type": "object",
                            "properties": {
                                "age": { "type": "integer", "minimum": 1 },
                                "occupation": { "type": "string" },
                                "is_married": { "type": "boolean" }
                            }
                        }
                    },
                    "required": ["question"]
                }
            },
            {
                "name": "list_categories",
                "description": "사용 가능한 모든 질문 카테고리와 답변 스타일을 조회합니다.",
                "inputSchema": { "type": "object", "properties": {} }
            },
            {
                "name": "customize_response",
                "description": "사용자 상황(나이, 직업, 결혼 여부)을 반영해 답변을 보완합니다.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "response": { "type": "string", "description": "이전에 생성된 답변" },
                        "age": { "type": "integer", "minimum": 1 },
                        "occupation": { "type": "string" },
                        "is_married": { "type": "boolean" }
                    },
                    "required": ["response"]
                }
            },
            {
                "name": "get_similar_questions",
                "description": "같은 카테고리의 다른 질문들을 추천합니다.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string" },
                        "question": { "type": "string" }
                    },
                    "required": ["category", "question"]
                }
            },
            {
                "name": "get_question_examples",
                "description": "카테고리별 예시 질문 목록을 조회합니다.",
                "inputSchema": { "type": "object", "properties": {} }
            }
        ]
    })
}

/// Handle one JSON-RPC request. Notifications get no response.
pub fn handle_request(req: &JsonRpcRequest, service: &HelperService) -> Option<JsonRpcResponse> {
    if req.is_notification() {
        tracing::debug!(method = %req.method, "Notification received");
        return None;
    }
    let id = req.id.clone().unwrap_or(Value::Null);

    let response = match req.method.as_str() {
        "initialize" => JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": MCP_PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": crate::VERSION
                }
            }),
        ),
        "ping" => JsonRpcResponse::success(id, json!({})),
        "tools/list" => JsonRpcResponse::success(id, tool_definitions()),
        "tools/call" => {
            let params = req.params.as_ref();
            let name = params
                .and_then(|p| p.get("name"))
                .and_then(|v| v.as_str())
                .unwrap_or("");
            let arguments = params
                .and_then(|p| p.get("arguments"))
                .cloned()
                .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

            JsonRpcResponse::success(id, dispatch_tool(name, &arguments, service))
        }
        other => {
            tracing::warn!(method = other, "Unknown MCP method");
            JsonRpcResponse::failure(id, METHOD_NOT_FOUND, format!("Method not found: {}", other))
        }
    };
    Some(response)
}

/// Run a tool and wrap its reply as MCP tool-call content.
pub fn dispatch_tool(name: &str, args: &Value, service: &HelperService) -> Value {
    tracing::debug!(tool = name, "Tool call");
    match name {
        "generate_marriage_response" => {
            respond(parse_args::<MarriageRequest>(args).and_then(|req| {
                service.generate_marriage_response(&req)
            }))
        }
        "generate_response" => respond(
            parse_args::<ResponseRequest>(args).and_then(|req| service.generate_response(&req)),
        ),
        "list_categories" => respond(Ok(service.list_categories())),
        "customize_response" => respond(
            parse_args::<CustomizeRequest>(args).map(|req| service.customize_response(&req)),
        ),
        "get_similar_questions" => respond(
            parse_args::<SimilarRequest>(args).and_then(|req| service.similar_questions(&req)),
        ),
        "get_question_examples" => respond(Ok(json!({
            "examples": service.question_examples(),
            "timestamp": crate::envelope::timestamp(),
        }))),
        _ => respond::<Value>(Err(ErrorReply::from(HelperError::invalid_input(format!(
            "Unknown tool: {}",
            name
        ))))),
    }
}

fn parse_args<T: DeserializeOwned>(args: &Value) -> Reply<T> {
    serde_json::from_value(args.clone()).map_err(|e| {
        ErrorReply::from(HelperError::invalid_input(format!("잘못된 인자입니다: {}", e)))
    })
}

fn respond<T: Serialize>(reply: Reply<T>) -> Value {
    let (payload, is_error) = match reply {
        Ok(value) => (serde_json::to_value(value), false),
        Err(err) => (serde_json::to_value(err), true),
    };
    let payload = payload.unwrap_or_else(|e| {
        serde_json::to_value(ErrorReply::system(e)).unwrap_or(Value::Null)
    });

    json!({
        "content": [{
            "type": "text",
            "text": serde_json::to_string_pretty(&payload).unwrap_or_default()
        }],
        "structuredContent": payload,
        "isError": is_error
    })
}
