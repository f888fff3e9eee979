//! End-to-end flow over a real database file: register, chat, restart,
//! verify everything rehydrates.

use lumen_client::{AppContext, ClientConfig, ClientEvent};
use lumen_shared::{DeliveryStatus, MessageKind, Role, Sender};
use lumen_store::Database;

fn context_at(path: &std::path::Path) -> AppContext {
    let db = Database::open_at(path).expect("open database");
    AppContext::new(db, ClientConfig::instant()).expect("build context")
}

#[tokio::test(start_paused = true)]
async fn full_session_and_chat_flow_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lumen.db");

    {
        let app = context_at(&path);
        let mut events = app.subscribe();

        assert!(app
            .session
            .register("Maria Garcia", "maria.garcia@example.com", "secret")
            .await
            .unwrap());

        app.conversation
            .send_message("hello there", MessageKind::Text)
            .await
            .unwrap();

        // Subscribers saw session and transcript activity.
        let mut saw_session = false;
        let mut saw_transcript = false;
        while let Ok(event) = events.try_recv() {
            match event {
                ClientEvent::SessionChanged => saw_session = true,
                ClientEvent::TranscriptChanged => saw_transcript = true,
                _ => {}
            }
        }
        assert!(saw_session);
        assert!(saw_transcript);
    }

    // "Restart": a fresh context over the same file.
    let app = context_at(&path);

    let profile = app.session.current().unwrap().expect("session restored");
    assert_eq!(profile.email, "maria.garcia@example.com");
    assert_eq!(profile.role, Role::User);

    let messages = app.conversation.messages().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[0].status, DeliveryStatus::Sent);
    assert_eq!(messages[1].sender, Sender::Bot);

    // The registered account can sign back in after logout.
    app.session.logout().unwrap();
    assert!(app
        .session
        .login("maria.garcia@example.com", "secret")
        .await
        .unwrap());
}

#[tokio::test(start_paused = true)]
async fn admin_dashboard_over_live_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lumen.db");
    let app = context_at(&path);

    app.session
        .register("James Brown", "james.brown@example.com", "pw")
        .await
        .unwrap();
    app.conversation
        .send_message("first", MessageKind::Text)
        .await
        .unwrap();
    app.conversation
        .send_message("data:image/png;base64,AAAA", MessageKind::Image)
        .await
        .unwrap();

    app.session.logout().unwrap();
    assert!(app.session.login("admin@lumen.app", "admin123").await.unwrap());

    let snapshot = app.dashboard.snapshot().unwrap();
    assert_eq!(snapshot.total_users, 1);
    assert_eq!(snapshot.total_messages, 4);
    assert_eq!(snapshot.user_messages, 2);
    assert_eq!(snapshot.bot_messages, 2);
    assert_eq!(snapshot.image_messages, 1);

    // Clearing the chat empties the dashboard's message figures too.
    app.conversation.clear_chat().unwrap();
    let snapshot = app.dashboard.snapshot().unwrap();
    assert_eq!(snapshot.total_messages, 0);
}
