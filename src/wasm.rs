use crate::api::Browser;
use crate::camera::Camera;
use crate::camera::PermissionError;
use crate::cards::Rank;
use crate::cards::Suit;
use crate::coach::Notice;
use crate::coach::Orchestrator;
use crate::coach::WinRateView;
use crate::config::Config;
use crate::config::Video;
use crate::detection::Frame;
use crate::detection::Landmark;
use serde::Serialize;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_futures::future_to_promise;

// Initialize function
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    log::set_logger(&CONSOLE)
        .map(|()| log::set_max_level(log::LevelFilter::Info))
        .ok();
}

/// Routes `log` records to the devtools console.
struct Console;

static CONSOLE: Console = Console;

impl log::Log for Console {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }
    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            log::Level::Info => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
    fn flush(&self) {}
}

/// getUserMedia-backed camera that feeds a `<video>` element.
pub struct WebCamera {
    video: web_sys::HtmlVideoElement,
    size: Video,
}

#[async_trait::async_trait(?Send)]
impl Camera for WebCamera {
    async fn open(&self) -> Result<(), PermissionError> {
        let devices = web_sys::window()
            .ok_or_else(|| PermissionError(String::from("no window")))?
            .navigator()
            .media_devices()
            .map_err(denied)?;
        let video = js_sys::Object::new();
        js_sys::Reflect::set(&video, &"width".into(), &self.size.width.into()).map_err(denied)?;
        js_sys::Reflect::set(&video, &"height".into(), &self.size.height.into()).map_err(denied)?;
        let constraints = web_sys::MediaStreamConstraints::new();
        constraints.set_video(&video);
        let stream = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(denied)?;
        let stream = JsFuture::from(stream)
            .await
            .map_err(denied)?
            .dyn_into::<web_sys::MediaStream>()
            .map_err(denied)?;
        self.video.set_src_object(Some(&stream));
        Ok(())
    }
}

fn denied(e: JsValue) -> PermissionError {
    PermissionError(
        js_sys::Reflect::get(&e, &"message".into())
            .ok()
            .and_then(|m| m.as_string())
            .unwrap_or_else(|| format!("{:?}", e)),
    )
}

fn reject(notice: Notice) -> JsValue {
    JsValue::from_str(&notice.to_string())
}

/// Plain JS object via a JSON round trip.
fn js<S>(value: &S) -> Result<JsValue, JsValue>
where
    S: Serialize + ?Sized,
{
    let json = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

#[derive(Serialize)]
struct Line<'a> {
    speaker: String,
    label: &'static str,
    text: &'a str,
}

#[wasm_bindgen(js_name = Coach)]
pub struct WasmCoach {
    inner: Rc<Orchestrator<Browser>>,
    config: Config,
}

#[wasm_bindgen(js_class = Coach)]
impl WasmCoach {
    #[wasm_bindgen(constructor)]
    pub fn new(api_url: Option<String>) -> Result<WasmCoach, JsValue> {
        let config = match api_url {
            Some(ref url) => Config::default()
                .with_api_url(url)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Config::default(),
        };
        log::info!("coaching against {}", config.api_url());
        Ok(Self {
            inner: Rc::new(Orchestrator::new(Browser, &config)),
            config,
        })
    }

    /// Pass the detector's `results` object straight through.
    #[wasm_bindgen(js_name = onFrame)]
    pub fn on_frame(&self, results: &JsValue) {
        let frame = js_sys::Reflect::get(results, &"multiHandLandmarks".into())
            .ok()
            .filter(|hands| !hands.is_undefined() && !hands.is_null())
            .and_then(|hands| js_sys::JSON::stringify(&hands).ok())
            .map(String::from)
            .and_then(|json| {
                serde_json::from_str::<Vec<Vec<Landmark>>>(&json)
                    .inspect_err(|e| log::warn!("unreadable landmarks: {}", e))
                    .ok()
            })
            .map(Frame::from)
            .unwrap_or_default();
        self.inner.on_frame(&frame);
    }

    #[wasm_bindgen(js_name = startCamera)]
    pub fn start_camera(&self, video: web_sys::HtmlVideoElement) -> js_sys::Promise {
        let coach = self.inner.clone();
        let camera = WebCamera {
            video,
            size: self.config.video,
        };
        future_to_promise(async move {
            coach
                .start_camera(&camera)
                .await
                .map(|()| JsValue::UNDEFINED)
                .map_err(reject)
        })
    }

    pub fn analyze(&self) -> Result<(), JsValue> {
        self.inner.trigger_analyze().map_err(reject)
    }

    /// Resolves with the win rate view once the hand is analyzed and the
    /// assistant has answered; rejects with the notice text.
    #[wasm_bindgen(js_name = submitCards)]
    pub fn submit_cards(
        &self,
        c1_rank: String,
        c1_suit: String,
        c2_rank: String,
        c2_suit: String,
    ) -> js_sys::Promise {
        let coach = self.inner.clone();
        future_to_promise(async move {
            let result = coach
                .submit_cards(&c1_rank, &c1_suit, &c2_rank, &c2_suit)
                .await
                .map_err(reject)?;
            js(&WinRateView::from(result.winrate))
        })
    }

    #[wasm_bindgen(js_name = sendMessage)]
    pub fn send_message(&self, text: String) -> js_sys::Promise {
        let coach = self.inner.clone();
        future_to_promise(async move {
            coach.send_message(&text).await;
            Ok(JsValue::UNDEFINED)
        })
    }

    pub fn transcript(&self) -> Result<JsValue, JsValue> {
        let history = self.inner.conversation();
        let lines = history
            .all()
            .map(|entry| Line {
                speaker: entry.speaker().to_string(),
                label: entry.speaker().label(),
                text: entry.text(),
            })
            .collect::<Vec<Line>>();
        js(&lines)
    }

    pub fn affordances(&self) -> Result<JsValue, JsValue> {
        js(&self.inner.affordances())
    }

    /// The current hand's win rate view, or `null` before any analysis.
    #[wasm_bindgen(js_name = winRate)]
    pub fn win_rate(&self) -> Result<JsValue, JsValue> {
        js(&self
            .inner
            .current_hand()
            .map(|result| WinRateView::from(result.winrate)))
    }

    pub fn phase(&self) -> String {
        self.inner.phase().to_string()
    }

    #[wasm_bindgen(js_name = trackingOptions)]
    pub fn tracking_options(&self) -> Result<JsValue, JsValue> {
        js(&self.config.tracking)
    }

    pub fn ranks() -> js_sys::Array {
        Rank::all()
            .iter()
            .map(|r| JsValue::from_str(&r.to_string()))
            .collect()
    }

    pub fn suits() -> js_sys::Array {
        Suit::all()
            .iter()
            .map(|s| JsValue::from_str(&s.to_string()))
            .collect()
    }
}
