//! Dashboard widgets.
//!
//! | Method | API Path |
//! |--------|----------|
//! | [`WidgetsApi::list`] | GET `/api/dashboards/{b}/widgets` |
//! | [`WidgetsApi::create`] | POST `/api/dashboards/{b}/widgets` |
//! | [`WidgetsApi::details`] | GET `/api/dashboards/{b}/widgets/{id}` |
//! | [`WidgetsApi::update`] | PATCH `/api/dashboards/{b}/widgets/{id}` |
//! | [`WidgetsApi::delete`] | DELETE `/api/dashboards/{b}/widgets/{id}` |
//! | [`WidgetsApi::options`] | GET `/api/dashboards/{b}/widgets/{id}/options` |
//! | [`WidgetsApi::define_options`] | PUT `/api/dashboards/{b}/widgets/{id}/options` |
//!
//! Series options are free-form objects. Their keys are held in snake_case
//! and converted recursively to and from the wire spelling, so
//! `{"dataOptions": {"directoryIds": [1]}}` reads back as
//! `data_options["directory_ids"]`.

use std::fmt::Display;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::serde_as;

use crate::client::TadClient;
use crate::error::Result;
use crate::schema::Lenient;

// ── Records ────────────────────────────────────────────────────────────

/// A widget placed on a dashboard grid.
#[serde_as]
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: Option<i64>,
    /// Returned as a string by some server versions.
    #[serde_as(as = "Option<Lenient>")]
    pub dashboard_id: Option<i64>,
    pub pos_x: Option<i64>,
    pub pos_y: Option<i64>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub title: Option<String>,
}

/// Chart configuration of a widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetOptions {
    /// One of `BigNumber`, `LineChart`, `BarChart`, `SecurityCompliance`,
    /// `StepChart`.
    #[serde(rename = "type")]
    pub chart_type: String,
    #[serde(default)]
    pub series: Vec<WidgetSeries>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSeries {
    #[serde(default, with = "crate::naming::keys")]
    pub data_options: Map<String, Value>,
    #[serde(default, with = "crate::naming::keys")]
    pub display_options: Map<String, Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewWidget<'a> {
    pos_x: i64,
    pos_y: i64,
    width: i64,
    height: i64,
    title: &'a str,
}

// ── Endpoints ──────────────────────────────────────────────────────────

pub struct WidgetsApi<'a> {
    client: &'a TadClient,
}

impl<'a> WidgetsApi<'a> {
    pub(crate) fn new(client: &'a TadClient) -> Self {
        WidgetsApi { client }
    }

    pub async fn list(&self, dashboard_id: impl Display) -> Result<Vec<Widget>> {
        self.client
            .get(&format!("dashboards/{dashboard_id}/widgets"))
            .await
    }

    /// Places a new widget at (`pos_x`, `pos_y`) with the given size.
    pub async fn create(
        &self,
        dashboard_id: impl Display,
        pos_x: i64,
        pos_y: i64,
        width: i64,
        height: i64,
        title: &str,
    ) -> Result<Widget> {
        let body = NewWidget {
            pos_x,
            pos_y,
            width,
            height,
            title,
        };
        self.client
            .post(&format!("dashboards/{dashboard_id}/widgets"), &body)
            .await
    }

    pub async fn details(
        &self,
        dashboard_id: impl Display,
        widget_id: impl Display,
    ) -> Result<Widget> {
        self.client
            .get(&widget_path(dashboard_id, widget_id))
            .await
    }

    pub async fn update(
        &self,
        dashboard_id: impl Display,
        widget_id: impl Display,
        update: &Widget,
    ) -> Result<Widget> {
        self.client
            .patch(&widget_path(dashboard_id, widget_id), update)
            .await
    }

    pub async fn delete(&self, dashboard_id: impl Display, widget_id: impl Display) -> Result<()> {
        self.client
            .delete(&widget_path(dashboard_id, widget_id))
            .await
    }

    pub async fn options(
        &self,
        dashboard_id: impl Display,
        widget_id: impl Display,
    ) -> Result<WidgetOptions> {
        self.client
            .get(&format!("{}/options", widget_path(dashboard_id, widget_id)))
            .await
    }

    /// Replaces the widget's chart type and series.
    pub async fn define_options(
        &self,
        dashboard_id: impl Display,
        widget_id: impl Display,
        options: &WidgetOptions,
    ) -> Result<()> {
        self.client
            .execute(
                Method::PUT,
                &format!("{}/options", widget_path(dashboard_id, widget_id)),
                None,
                Some(options),
            )
            .await
    }
}

fn widget_path(dashboard_id: impl Display, widget_id: impl Display) -> String {
    format!("dashboards/{dashboard_id}/widgets/{widget_id}")
}
