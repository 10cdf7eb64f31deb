//! Tool dispatch tests: what the agent receives for each tool

mod support;

use github_agent::agent::{Agent, FunctionCall, ToolCall};
use github_agent::config::LlmSettings;
use github_agent::{ToolKind, ToolRegistry};
use github_tools::Credential;
use serde_json::{Value, json};
use support::{MockGitHub, raw_repository, raw_search_item};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_get_user_repositories_renders_flat_records() {
    let github = MockGitHub::start();
    github.mount(
        Mock::given(method("GET"))
            .and(path("/users/testuser/repos"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([raw_repository("test-repo", Some("Python"), 10)])),
            ),
    );

    let client = github.client();
    let output = ToolRegistry::new(&client)
        .invoke("get_user_repositories", json!({"username": "testuser"}))
        .unwrap();

    assert!(!output.is_error);
    assert_eq!(output.tool, ToolKind::ListUserRepositories);
    assert_eq!(
        output.value,
        json!([{
            "name": "test-repo",
            "url": "https://github.com/testuser/test-repo",
            "language": "Python",
            "stars": 10,
            "description": "Test repository",
            "updated_at": "2025-12-10T00:00:00Z"
        }])
    );
}

#[test]
fn test_remote_failure_renders_error_payload() {
    let github = MockGitHub::start();
    github.mount(
        Mock::given(method("GET"))
            .and(path("/users/nonexistent-user/repos"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found")),
    );

    let client = github.client();
    let output = ToolRegistry::new(&client)
        .invoke("get_user_repositories", json!({"username": "nonexistent-user"}))
        .unwrap();

    assert!(output.is_error);
    assert_eq!(
        output.value,
        json!({
            "error": "Status code: 404",
            "status_code": 404,
            "message": "Not Found"
        })
    );
}

#[test]
fn test_create_github_issue_without_body_argument() {
    let github = MockGitHub::start();
    github.mount(
        Mock::given(method("POST"))
            .and(path("/repos/testuser/test-repo/issues"))
            .and(body_json(json!({"title": "Test Issue", "body": ""})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "number": 1,
                "title": "Test Issue",
                "html_url": "https://github.com/testuser/test-repo/issues/1",
                "state": "open"
            }))),
    );

    let client = github.client();
    let output = ToolRegistry::new(&client)
        .invoke(
            "create_github_issue",
            json!({"owner": "testuser", "repo": "test-repo", "title": "Test Issue"}),
        )
        .unwrap();

    assert!(!output.is_error);
    assert_eq!(output.value["number"], 1);
    assert_eq!(output.value["state"], "open");
    assert!(output.value.get("error").is_none());
}

#[test]
fn test_search_github_code_renders_hits() {
    let github = MockGitHub::start();
    github.mount(
        Mock::given(method("GET"))
            .and(path("/search/code"))
            .and(query_param("per_page", "5"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"items": [raw_search_item("test.py")]})),
            ),
    );

    let client = github.client();
    let output = ToolRegistry::new(&client)
        .invoke("search_github_code", json!({"query": "async def"}))
        .unwrap();

    assert_eq!(output.value[0]["file"], "test.py");
    assert_eq!(output.value[0]["repo"], "testuser/test-repo");
    assert_eq!(output.value[0]["path"], "src/test.py");
}

#[test]
fn test_get_repository_info_renders_detail() {
    let github = MockGitHub::start();
    github.mount(
        Mock::given(method("GET"))
            .and(path("/repos/testuser/test-repo"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(raw_repository("test-repo", Some("Python"), 10)),
            ),
    );

    let client = github.client();
    let output = ToolRegistry::new(&client)
        .invoke(
            "get_repository_info",
            json!({"owner": "testuser", "repo": "test-repo"}),
        )
        .unwrap();

    let keys: Vec<&String> = output.value.as_object().unwrap().keys().collect();
    for key in [
        "name",
        "description",
        "url",
        "language",
        "stars",
        "forks",
        "open_issues",
        "created_at",
        "updated_at",
    ] {
        assert!(keys.iter().any(|k| *k == key), "missing key {key}");
    }
    assert_eq!(keys.len(), 9);
}

#[test]
fn test_agent_answers_tool_call_with_result() {
    let github = MockGitHub::start();
    github.mount(
        Mock::given(method("GET"))
            .and(path("/repos/poethera/aitry001"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(raw_repository("aitry001", Some("Python"), 3)),
            ),
    );

    let settings = LlmSettings {
        api_key: Credential::new("cp_key"),
        base_url: "https://api.githubcopilot.com/v1".to_string(),
        model: "gpt-4".to_string(),
        temperature: 0.0,
    };
    let client = github.client();
    let agent = Agent::new(&settings, ToolRegistry::new(&client));

    let message = agent.answer_tool_call(&ToolCall {
        id: "call_abc".to_string(),
        function: FunctionCall {
            name: "get_repository_info".to_string(),
            arguments: r#"{"owner":"poethera","repo":"aitry001"}"#.to_string(),
        },
    });

    assert_eq!(message.tool_call_id, "call_abc");
    let content: Value = serde_json::from_str(&message.content).unwrap();
    assert_eq!(content["name"], "aitry001");
    assert_eq!(content["stars"], 3);
}
