//! Transient alerts shown in named page regions.
//!
//! Every alert schedules its own clear on a tokio timer. A newer alert in the
//! same region aborts the pending clear first, and the clear task re-checks
//! the region's sequence number under the lock, so an old timer can never
//! remove a newer message.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::AbortHandle;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    pub fn css_class(self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
}

impl Alert {
    /// Markup written into the region, with the message escaped.
    pub fn html(&self) -> String {
        format!(
            "<div class=\"{}\">{}</div>",
            self.kind.css_class(),
            escape_html(&self.message)
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Default)]
struct Region {
    alert: Option<Alert>,
    seq: u64,
    clear_timer: Option<AbortHandle>,
}

/// The set of alert regions on a page. Cheap to clone; clones share state.
///
/// Must be used from within a tokio runtime: showing an alert spawns its
/// clear timer.
#[derive(Clone)]
pub struct AlertBoard {
    regions: Arc<Mutex<HashMap<String, Region>>>,
    timeout: Duration,
}

impl AlertBoard {
    pub fn new<'a>(region_ids: impl IntoIterator<Item = &'a str>, timeout: Duration) -> Self {
        let regions: HashMap<String, Region> = region_ids
            .into_iter()
            .map(|id| (id.to_string(), Region::default()))
            .collect();
        Self {
            regions: Arc::new(Mutex::new(regions)),
            timeout,
        }
    }

    /// Writes `message` into `region` and schedules its removal. Returns
    /// `false` (and does nothing) when the region does not exist.
    pub fn show(&self, message: impl Into<String>, kind: AlertKind, region: &str) -> bool {
        let mut regions = self.regions.lock();
        let Some(slot) = regions.get_mut(region) else {
            debug!(region, "Alert for unknown region dropped");
            return false;
        };

        if let Some(timer) = slot.clear_timer.take() {
            timer.abort();
        }
        slot.seq += 1;
        slot.alert = Some(Alert {
            message: message.into(),
            kind,
        });

        let seq = slot.seq;
        let timeout = self.timeout;
        let board = Arc::clone(&self.regions);
        let region_id = region.to_string();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            let mut regions = board.lock();
            if let Some(slot) = regions.get_mut(&region_id) {
                if slot.seq == seq {
                    slot.alert = None;
                    slot.clear_timer = None;
                }
            }
        });
        slot.clear_timer = Some(handle.abort_handle());
        true
    }

    pub fn current(&self, region: &str) -> Option<Alert> {
        self.regions
            .lock()
            .get(region)
            .and_then(|slot| slot.alert.clone())
    }

    /// Removes the region's alert now and cancels its pending clear.
    pub fn clear(&self, region: &str) {
        if let Some(slot) = self.regions.lock().get_mut(region) {
            if let Some(timer) = slot.clear_timer.take() {
                timer.abort();
            }
            slot.seq += 1;
            slot.alert = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::sleep;

    use super::*;

    const TIMEOUT: Duration = Duration::from_millis(6000);

    fn board() -> AlertBoard {
        AlertBoard::new(["general_alerts", "weights_alerts"], TIMEOUT)
    }

    #[tokio::test(start_paused = true)]
    async fn test_alert_cleared_after_timeout() {
        let alerts = board();
        assert!(alerts.show("saved", AlertKind::Success, "general_alerts"));

        sleep(Duration::from_millis(5999)).await;
        assert_eq!(
            alerts.current("general_alerts").map(|a| a.message),
            Some("saved".to_string())
        );

        sleep(Duration::from_millis(2)).await;
        assert_eq!(alerts.current("general_alerts"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_alert_survives_older_timer() {
        let alerts = board();
        alerts.show("first", AlertKind::Error, "general_alerts");
        sleep(Duration::from_millis(4000)).await;
        alerts.show("second", AlertKind::Error, "general_alerts");

        // past the first alert's deadline
        sleep(Duration::from_millis(2500)).await;
        assert_eq!(
            alerts.current("general_alerts").map(|a| a.message),
            Some("second".to_string())
        );

        // past the second alert's deadline
        sleep(Duration::from_millis(3600)).await;
        assert_eq!(alerts.current("general_alerts"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_regions_are_independent() {
        let alerts = board();
        alerts.show("bad weights", AlertKind::Error, "weights_alerts");
        sleep(Duration::from_millis(3000)).await;
        alerts.show("ok", AlertKind::Success, "general_alerts");

        sleep(Duration::from_millis(3100)).await;
        assert_eq!(alerts.current("weights_alerts"), None);
        assert!(alerts.current("general_alerts").is_some());
    }

    #[tokio::test]
    async fn test_unknown_region_is_ignored() {
        let alerts = board();
        assert!(!alerts.show("nowhere", AlertKind::Error, "missing_alerts"));
        assert_eq!(alerts.current("missing_alerts"), None);
    }

    #[tokio::test]
    async fn test_clear_removes_immediately() {
        let alerts = board();
        alerts.show("x", AlertKind::Error, "general_alerts");
        alerts.clear("general_alerts");
        assert_eq!(alerts.current("general_alerts"), None);
    }

    #[test]
    fn test_html_is_escaped() {
        let alert = Alert {
            message: "<b>x</b> & y".to_string(),
            kind: AlertKind::Error,
        };
        assert_eq!(
            alert.html(),
            "<div class=\"error\">&lt;b&gt;x&lt;/b&gt; &amp; y</div>"
        );
    }
}
