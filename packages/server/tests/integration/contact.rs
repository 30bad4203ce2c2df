use std::sync::Arc;

use reqwest::Method;
use serde_json::json;

use crate::support::smtp::FakeSmtp;
use crate::support::{ACCOUNT, FailingMailer, TestApp, closed_port, routes, test_config};

fn ada() -> serde_json::Value {
    json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"})
}

mod sending {
    use super::*;

    #[tokio::test]
    async fn valid_submission_is_emailed_and_acknowledged() {
        let (app, mailer) = TestApp::spawn_recording().await;

        let res = app.post_json(routes::SEND_EMAIL, &ada()).await;

        assert_eq!(res.status, 200, "Unexpected response: {}", res.text);
        assert_eq!(
            res.body,
            json!({"success": true, "message": "Email sent successfully"})
        );
        assert_eq!(res.header("content-type"), Some("application/json"));

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "New Contact Form Message from Ada");
        assert!(sent[0].body.contains("Name: Ada"));
        assert!(sent[0].body.contains("Message: Hello"));
    }

    #[tokio::test]
    async fn envelope_is_always_the_configured_account() {
        let (app, mailer) = TestApp::spawn_recording().await;

        let res = app
            .post_json(
                routes::SEND_EMAIL,
                &json!({"name": "Eve", "email": "eve@attacker.test", "message": "hi"}),
            )
            .await;
        assert_eq!(res.status, 200, "Unexpected response: {}", res.text);

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, ACCOUNT);
        assert_eq!(sent[0].to, ACCOUNT);
        assert!(sent[0].body.contains("Email: eve@attacker.test"));
    }

    #[tokio::test]
    async fn json_without_content_type_is_accepted() {
        let (app, mailer) = TestApp::spawn_recording().await;

        let res = app
            .post_raw(routes::SEND_EMAIL, &ada().to_string())
            .await;

        assert_eq!(res.status, 200, "Unexpected response: {}", res.text);
        assert_eq!(mailer.sent().len(), 1);
    }

    #[tokio::test]
    async fn long_name_is_emailed() {
        let (app, mailer) = TestApp::spawn_recording().await;
        let name = "a".repeat(201);

        let res = app
            .post_json(
                routes::SEND_EMAIL,
                &json!({"name": name, "email": "ada@example.com", "message": "Hello"}),
            )
            .await;

        assert_eq!(res.status, 200, "Unexpected response: {}", res.text);
        assert_eq!(
            mailer.sent()[0].subject,
            format!("New Contact Form Message from {name}")
        );
    }

    #[tokio::test]
    async fn each_request_sends_exactly_one_email() {
        let (app, mailer) = TestApp::spawn_recording().await;

        for _ in 0..3 {
            let res = app.post_json(routes::SEND_EMAIL, &ada()).await;
            assert_eq!(res.status, 200);
        }

        assert_eq!(mailer.sent().len(), 3);
    }
}

mod failures {
    use super::*;

    #[tokio::test]
    async fn mailer_failure_returns_500_with_details() {
        let app = TestApp::spawn(Arc::new(FailingMailer)).await;

        let res = app.post_json(routes::SEND_EMAIL, &ada()).await;

        assert_eq!(res.status, 500);
        assert_eq!(
            res.body,
            json!({
                "success": false,
                "error": "Failed to send email",
                "details": "SMTP transport error: Connection refused"
            })
        );
    }

    #[tokio::test]
    async fn unreachable_smtp_server_returns_500() {
        let mut config = test_config();
        config.smtp.port = closed_port();
        let app = TestApp::spawn_smtp(config).await;

        let res = app.post_json(routes::SEND_EMAIL, &ada()).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["success"], false);
        assert_eq!(res.body["error"], "Failed to send email");
        assert!(res.body["details"].is_string());
    }

    #[tokio::test]
    async fn missing_account_returns_500() {
        let mut config = test_config();
        config.smtp.username = String::new();
        config.smtp.password = String::new();
        let app = TestApp::spawn_smtp(config).await;

        let res = app.post_json(routes::SEND_EMAIL, &ada()).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["error"], "Failed to send email");
    }
}

mod invalid_input {
    use super::*;

    #[tokio::test]
    async fn missing_field_is_rejected_without_sending() {
        let (app, mailer) = TestApp::spawn_recording().await;

        let res = app
            .post_json(
                routes::SEND_EMAIL,
                &json!({"name": "Ada", "email": "ada@example.com"}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["success"], false);
        assert_eq!(res.body["error"], "Invalid request body");
        assert!(
            res.body["details"]
                .as_str()
                .is_some_and(|d| d.contains("message")),
            "details should name the missing field: {}",
            res.text
        );
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn wrongly_typed_field_is_rejected() {
        let (app, mailer) = TestApp::spawn_recording().await;

        let res = app
            .post_json(
                routes::SEND_EMAIL,
                &json!({"name": 42, "email": "ada@example.com", "message": "Hello"}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let (app, mailer) = TestApp::spawn_recording().await;

        let res = app.post_raw(routes::SEND_EMAIL, "{\"name\": ").await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["error"], "Invalid request body");
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let (app, mailer) = TestApp::spawn_recording().await;

        let res = app
            .post_json(
                routes::SEND_EMAIL,
                &json!({"name": "  ", "email": "ada@example.com", "message": "Hello"}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["details"], "name must not be empty");
        assert!(mailer.sent().is_empty());
    }
}

mod methods {
    use super::*;

    #[tokio::test]
    async fn preflight_returns_204_with_empty_body() {
        let (app, mailer) = TestApp::spawn_recording().await;

        let res = app.request(Method::OPTIONS, routes::SEND_EMAIL).await;

        assert_eq!(res.status, 204);
        assert!(res.text.is_empty());
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn other_methods_are_rejected_with_405() {
        let (app, mailer) = TestApp::spawn_recording().await;

        for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
            let res = app.request(method.clone(), routes::SEND_EMAIL).await;

            assert_eq!(res.status, 405, "{method} should be rejected");
            assert_eq!(res.body, json!({"error": "Method not allowed"}));
            assert_eq!(res.header("content-type"), Some("application/json"));
        }
        assert!(mailer.sent().is_empty());
    }
}

mod smtp {
    use super::*;

    #[tokio::test]
    async fn submission_reaches_the_relay_addressed_to_the_account() {
        let relay = FakeSmtp::start().await;
        let mut config = test_config();
        config.smtp.port = relay.port;
        let app = TestApp::spawn_smtp(config).await;

        let res = app.post_json(routes::SEND_EMAIL, &ada()).await;

        assert_eq!(res.status, 200, "Unexpected response: {}", res.text);
        assert_eq!(res.body["success"], true);

        let received = relay.received();
        assert_eq!(received.len(), 1);
        let mail = &received[0];
        assert!(mail.authenticated);
        assert_eq!(mail.mail_from, ACCOUNT);
        assert_eq!(mail.rcpt_to, vec![ACCOUNT.to_string()]);
        assert!(mail.data.contains("Subject: New Contact Form Message from Ada"));
        assert!(mail.data.contains("Email: ada@example.com"));

        let sessions = relay.finished_sessions(1).await;
        assert_eq!(sessions.len(), 1, "exactly one SMTP connection per request");
        assert!(sessions[0].quit, "session should end with QUIT");
        assert!(sessions[0].closed, "connection should be closed after QUIT");
    }

    #[tokio::test]
    async fn rejected_message_returns_500_and_releases_the_connection() {
        let relay = FakeSmtp::rejecting_data().await;
        let mut config = test_config();
        config.smtp.port = relay.port;
        let app = TestApp::spawn_smtp(config).await;

        let res = app.post_json(routes::SEND_EMAIL, &ada()).await;

        assert_eq!(res.status, 500, "Unexpected response: {}", res.text);
        assert_eq!(res.body["success"], false);
        assert_eq!(res.body["error"], "Failed to send email");
        assert!(res.body["details"].is_string());
        assert!(relay.received().is_empty());

        let sessions = relay.finished_sessions(1).await;
        assert_eq!(sessions.len(), 1);
        assert!(sessions[0].closed, "connection should be closed after a rejected DATA");
    }
}
