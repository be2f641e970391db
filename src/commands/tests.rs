use alliance_core::{
    AdminConfig, DisplayStyle, ErrorCategory, MediaResolver, Partner, Persistence, RankLabel, Settings, SyncError,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

const NAMESPACE: &str = "/wp-json/s2j-alliance-manager/v1";

fn client_for(server: &MockServer) -> RestClient {
    let config = AdminConfig::new(format!("{}{NAMESPACE}/", server.uri()), "nonce-123").unwrap();
    RestClient::new(config)
}

#[tokio::test]
async fn test_partner_load_reads_settings_and_models() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{NAMESPACE}/settings")))
        .and(header(NONCE_HEADER, "nonce-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "display_style": "masonry",
            "ffmpeg_path": "/opt/ffmpeg",
            "content_models": []
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{NAMESPACE}/content-models")))
        .and(header(NONCE_HEADER, "nonce-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"frontpage": "YES", "rank": "gold", "logo": 12, "jump_url": "https://a.test", "behavior": "jump", "message": ""},
            {"frontpage": "NO", "rank": "default", "logo": "0", "behavior": "modal", "message": "Hi"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = PartnerEndpoint::new(client_for(&server));
    let partners = endpoint.load().await.unwrap();

    assert_eq!(partners.len(), 2);
    assert_eq!(partners.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
    assert!(partners[0].frontpage);
    assert_eq!(partners[1].message, "Hi");
    assert_eq!(endpoint.settings().display_style, DisplayStyle::Masonry);
}

#[tokio::test]
async fn test_partner_save_resends_settings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{NAMESPACE}/settings")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "display_style": "grid-multi",
            "ffmpeg_path": "/opt/ffmpeg"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{NAMESPACE}/save-all")))
        .and(header(NONCE_HEADER, "nonce-123"))
        .and(body_json(json!({
            "settings": {"display_style": "grid-multi", "ffmpeg_path": "/opt/ffmpeg"},
            "content_models": [{
                "frontpage": "YES",
                "rank": "gold",
                "logo": 0,
                "poster": 0,
                "jump_url": "",
                "behavior": "jump",
                "message": ""
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Settings saved successfully."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = PartnerEndpoint::new(client_for(&server));
    endpoint.load_settings().await.unwrap();
    let partner = Partner {
        id: 4,
        frontpage: true,
        ..Partner::with_rank("gold")
    };
    let receipt = endpoint.save(&[partner]).await.unwrap();
    assert_eq!(receipt.message.as_deref(), Some("Settings saved successfully."));
}

#[tokio::test]
async fn test_save_settings_updates_cached_settings() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{NAMESPACE}/save-all")))
        .and(body_partial_json(json!({"settings": {"display_style": "masonry"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let endpoint = PartnerEndpoint::new(client_for(&server));
    let settings = Settings {
        display_style: DisplayStyle::Masonry,
        ..Settings::default()
    };
    endpoint.save_settings(settings.clone(), &[]).await.unwrap();
    assert_eq!(endpoint.settings(), settings);
}

#[tokio::test]
async fn test_overlapping_save_all_is_refused() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{NAMESPACE}/save-all")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true}))
                .set_delay(std::time::Duration::from_millis(200)),
        )
        .expect(2)
        .mount(&server)
        .await;

    let endpoint = PartnerEndpoint::new(client_for(&server));
    let settings = Settings {
        display_style: DisplayStyle::GridMulti,
        ..Settings::default()
    };
    let partners = [Partner::with_rank("gold")];

    let (from_form, from_list) = tokio::join!(
        endpoint.save_settings(settings.clone(), &partners),
        endpoint.save(&partners),
    );
    assert!(from_form.is_ok());
    assert_eq!(from_list.unwrap_err(), SyncError::Busy);
    assert!(!endpoint.is_saving());
    assert_eq!(endpoint.settings(), settings);

    // the partner list goes out with the settings that were just saved
    endpoint.save(&partners).await.unwrap();
}

#[tokio::test]
async fn test_rank_label_save_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{NAMESPACE}/rank-labels")))
        .and(body_json(json!({
            "rank_labels": [{
                "id": 0,
                "title": "Gold",
                "content": "",
                "thumbnail_id": 0,
                "menu_order": 0,
                "slug": "gold"
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Rank labels saved successfully."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = RankLabelEndpoint::new(client_for(&server));
    let receipt = endpoint.save(&[RankLabel::titled("Gold")]).await.unwrap();
    assert_eq!(receipt.message.as_deref(), Some("Rank labels saved successfully."));
}

#[tokio::test]
async fn test_error_statuses_map_to_categories() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{NAMESPACE}/rank-labels")))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "code": "rest_forbidden",
            "message": "Sorry, you are not allowed to do that.",
            "data": {"status": 403}
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{NAMESPACE}/save-all")))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": "save_failed",
            "message": "Failed to save settings.",
            "data": {"status": 500}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = RankLabelEndpoint::new(client.clone()).load().await.unwrap_err();
    assert_eq!(err, SyncError::Permission { status: 403 });

    let err = PartnerEndpoint::new(client).save(&[]).await.unwrap_err();
    assert_eq!(
        err,
        SyncError::Server {
            status: Some(500),
            message: "Failed to save settings.".to_string()
        }
    );
}

#[tokio::test]
async fn test_unsuccessful_body_is_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{NAMESPACE}/rank-labels")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
        .mount(&server)
        .await;

    let err = RankLabelEndpoint::new(client_for(&server)).save(&[]).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Server);
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let config = AdminConfig::new("http://127.0.0.1:9/wp-json/s2j-alliance-manager/v1/", "nonce").unwrap();
    let err = RankLabelEndpoint::new(RestClient::new(config)).load().await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Network);
}

#[tokio::test]
async fn test_media_resolution() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/media/31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 31,
            "source_url": "https://site.test/uploads/logo.mp4",
            "mime_type": "video/mp4",
            "alt_text": "Logo"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/media/32"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "rest_post_invalid_id",
            "message": "Invalid post ID."
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/media"))
        .and(query_param("parent", "31"))
        .and(query_param("media_type", "image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 40, "source_url": "https://site.test/uploads/logo-poster.jpg", "mime_type": "image/jpeg"}
        ])))
        .mount(&server)
        .await;

    let media = MediaLibrary::new(client_for(&server));
    let logo = media.resolve(31).await.unwrap().unwrap();
    assert!(logo.is_video());
    assert_eq!(logo.alt, "Logo");
    assert_eq!(media.resolve(32).await.unwrap(), None);
    assert_eq!(media.resolve(0).await.unwrap(), None);
    assert_eq!(media.poster_for(31).await.unwrap(), Some(40));
}
