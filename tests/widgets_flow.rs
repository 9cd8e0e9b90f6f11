//! Integration tests for the widgets, attack types and email notifiers
//! endpoint families using wiremock.

use serde_json::Map;
use tenable_ad::attack_types::AttackTypeOption;
use tenable_ad::auth::ApiKey;
use tenable_ad::client::TadClient;
use tenable_ad::email_notifiers::EmailNotifier;
use tenable_ad::query::Page;
use tenable_ad::widgets::{Widget, WidgetOptions, WidgetSeries};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_client(server: &MockServer) -> TadClient {
    TadClient::with_base_url(&ApiKey::new("mock-token"), &format!("{}/api/", server.uri()))
        .expect("mock client should build")
}

fn widget_json(title: &str) -> serde_json::Value {
    serde_json::json!({
        "dashboardId": "1",
        "height": 22,
        "id": 1,
        "posX": 11,
        "posY": 12,
        "title": title,
        "width": 21
    })
}

// ── Widgets ────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_and_create_widgets() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/dashboards/1/widgets"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([widget_json("test_widget")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/dashboards/1/widgets"))
        .and(body_json(serde_json::json!({
            "posX": 11,
            "posY": 12,
            "width": 21,
            "height": 22,
            "title": "test_widget"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(widget_json("test_widget")))
        .expect(1)
        .mount(&server)
        .await;

    let widgets = client.widgets().list("1").await.unwrap();
    assert_eq!(widgets[0].dashboard_id, Some(1));

    let widget = client
        .widgets()
        .create("1", 11, 12, 21, 22, "test_widget")
        .await
        .unwrap();
    assert_eq!(widget.title.as_deref(), Some("test_widget"));
    assert_eq!(widget.pos_x, Some(11));
    assert_eq!(widget.pos_y, Some(12));
    assert_eq!(widget.width, Some(21));
    assert_eq!(widget.height, Some(22));
}

#[tokio::test]
async fn widget_details_update_and_delete() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/dashboards/1/widgets/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(widget_json("test_widget")))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/dashboards/1/widgets/1"))
        .and(body_json(serde_json::json!({"title": "EDITED"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(widget_json("EDITED")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/dashboards/1/widgets/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let widgets = client.widgets();
    assert_eq!(widgets.details(1, 1).await.unwrap().id, Some(1));
    let update = Widget {
        title: Some("EDITED".into()),
        ..Default::default()
    };
    assert_eq!(
        widgets.update(1, 1, &update).await.unwrap().title.as_deref(),
        Some("EDITED")
    );
    widgets.delete(1, 1).await.unwrap();
}

#[tokio::test]
async fn widget_options_convert_nested_keys() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/dashboards/1/widgets/1/options"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "type": "BigNumber",
            "series": [{
                "dataOptions": {
                    "duration": 10,
                    "interval": "10",
                    "directoryIds": [1, 2, 3],
                    "active": true
                },
                "displayOptions": {"label": "User"}
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/dashboards/1/widgets/1/options"))
        .and(body_json(serde_json::json!({
            "type": "LineChart",
            "series": [{
                "dataOptions": {"directoryIds": [1], "profileId": 1},
                "displayOptions": {"label": "User"}
            }]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let options = client.widgets().options(1, 1).await.unwrap();
    assert_eq!(options.chart_type, "BigNumber");
    for series in &options.series {
        assert_eq!(series.data_options["duration"], 10);
        assert_eq!(series.data_options["interval"], "10");
        assert_eq!(
            series.data_options["directory_ids"],
            serde_json::json!([1, 2, 3])
        );
        assert_eq!(series.data_options["active"], true);
        assert_eq!(series.display_options["label"], "User");
    }

    let mut data_options = Map::new();
    data_options.insert("directory_ids".into(), serde_json::json!([1]));
    data_options.insert("profile_id".into(), serde_json::json!(1));
    let mut display_options = Map::new();
    display_options.insert("label".into(), serde_json::json!("User"));
    let options = WidgetOptions {
        chart_type: "LineChart".into(),
        series: vec![WidgetSeries {
            data_options,
            display_options,
        }],
    };
    client
        .widgets()
        .define_options(1, 1, &options)
        .await
        .unwrap();
}

// ── Attack types ───────────────────────────────────────────────────────

#[tokio::test]
async fn attack_types_and_options() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/attack-types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": 1,
            "name": "DCSync",
            "workloadQuota": 2,
            "criticity": "critical",
            "resources": [],
            "vectorTemplateReplacements": []
        }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/profiles/1/attack-types/2/attack-type-options"))
        .and(query_param("staged", "true"))
        .and(query_param("perPage", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": 1,
            "codename": "dc_list",
            "profileId": 1,
            "attackTypeId": 2,
            "directoryId": null,
            "value": "[]",
            "valueType": "array/string",
            "staged": true
        }])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/profiles/1/attack-types/2/attack-type-options"))
        .and(body_json(serde_json::json!([{
            "codename": "dc_list",
            "value": "[]",
            "valueType": "array/string"
        }])))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": 2,
            "codename": "dc_list",
            "value": "[]",
            "valueType": "array/string"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let types = client.attack_types().list().await.unwrap();
    assert_eq!(types[0].criticity.as_deref(), Some("critical"));

    let page = Page {
        page: None,
        per_page: Some(10),
    };
    let options = client
        .attack_type_options()
        .list(1, 2, Some(true), &page)
        .await
        .unwrap();
    assert_eq!(options[0].staged, Some(true));

    let new = AttackTypeOption {
        codename: Some("dc_list".into()),
        value: Some("[]".into()),
        value_type: Some("array/string".into()),
        ..Default::default()
    };
    let created = client
        .attack_type_options()
        .create(1, 2, &[new])
        .await
        .unwrap();
    assert_eq!(created[0].id, Some(2));
}

// ── Email notifiers ────────────────────────────────────────────────────

#[tokio::test]
async fn email_notifier_crud() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    let notifier = serde_json::json!({
        "id": 1,
        "address": "soc@example.com",
        "criticityThreshold": 50,
        "directories": [1],
        "description": null,
        "checkers": [1, 2],
        "attackTypes": [],
        "profiles": [1, 2],
        "shouldNotifyOnInitialFullSecurityCheck": false,
        "inputType": "Deviances"
    });
    Mock::given(method("GET"))
        .and(path("/api/email-notifiers"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([notifier.clone()])),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/email-notifiers"))
        .and(body_json(serde_json::json!({
            "inputType": "Deviances",
            "checkers": [1, 2],
            "profiles": [1, 2]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(notifier.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/email-notifiers/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(notifier.clone()))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/email-notifiers/1"))
        .and(body_json(serde_json::json!({"address": "soc@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(notifier))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/email-notifiers/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let notifiers = client.email_notifiers();
    assert_eq!(notifiers.list().await.unwrap().len(), 1);

    let new = EmailNotifier {
        input_type: Some("Deviances".into()),
        checkers: Some(vec![1, 2]),
        profiles: Some(vec![1, 2]),
        ..Default::default()
    };
    assert_eq!(notifiers.create(&new).await.unwrap().id, Some(1));
    assert_eq!(
        notifiers.details(1).await.unwrap().criticity_threshold,
        Some(50)
    );
    let update = EmailNotifier {
        address: Some("soc@example.com".into()),
        ..Default::default()
    };
    notifiers.update(1, &update).await.unwrap();
    notifiers.delete(1).await.unwrap();
}
