use super::insight;
use super::notice::Notice;
use super::phase::Phase;
use super::view::Affordances;
use crate::api::AnalysisClient;
use crate::api::ChatClient;
use crate::api::HandResult;
use crate::api::Transport;
use crate::camera::Camera;
use crate::camera::CameraStatus;
use crate::config::Config;
use crate::conversation::ConversationLog;
use crate::conversation::Slot;
use crate::conversation::Speaker;
use crate::conversation::Transcript;
use crate::detection::DetectionObserver;
use crate::detection::DetectionState;
use crate::detection::Frame;
use crate::input::CardInputGate;
use std::cell::Cell;
use std::cell::Ref;
use std::cell::RefCell;
use std::rc::Rc;

/// One coaching session.
///
/// Owns the detection flag, the current hand, and the conversation, and
/// sequences the remote calls that connect them:
///
/// - the analyze action is gated on a hand being in frame
/// - submitted cards are validated, then analyzed
/// - a successful analysis is followed by an automatic question to the
///   assistant, strictly after the analysis resolves
/// - free-text chat works in every phase, grounded in the latest hand
///
/// Methods take `&self` and never hold a borrow across an await, so a page
/// can keep the session in an `Rc` and drive several flows at once.
/// Remote failures never escape: they come back as a [`Notice`] or are
/// written into the conversation as a bot turn.
pub struct Orchestrator<T> {
    analysis: AnalysisClient<Rc<T>>,
    chat: ChatClient<Rc<T>>,
    gate: CardInputGate,
    detection: DetectionState,
    camera: Cell<CameraStatus>,
    phase: Cell<Phase>,
    current: RefCell<Option<HandResult>>,
    transcript: RefCell<Transcript>,
}

impl<T> Orchestrator<T>
where
    T: Transport,
{
    pub fn new(transport: T, config: &Config) -> Self {
        let transport = Rc::new(transport);
        Self {
            analysis: AnalysisClient::new(transport.clone(), config.analyze_url()),
            chat: ChatClient::new(transport, config.chat_url()),
            gate: CardInputGate,
            detection: DetectionState::default(),
            camera: Cell::default(),
            phase: Cell::default(),
            current: RefCell::default(),
            transcript: RefCell::default(),
        }
    }
}

/// read-only state
impl<T> Orchestrator<T> {
    pub fn phase(&self) -> Phase {
        self.phase.get()
    }
    pub fn camera(&self) -> CameraStatus {
        self.camera.get()
    }
    pub fn is_present(&self) -> bool {
        self.detection.is_present()
    }
    pub fn current_hand(&self) -> Option<HandResult> {
        self.current.borrow().clone()
    }
    pub fn conversation(&self) -> Ref<'_, ConversationLog> {
        Ref::map(self.transcript.borrow(), Transcript::log)
    }
    /// Replies still awaited from the assistant.
    pub fn pending_replies(&self) -> usize {
        self.transcript.borrow().pending()
    }
    pub fn affordances(&self) -> Affordances {
        Affordances::derive(self.phase(), self.camera(), self.is_present())
    }
}

/// vision and camera
impl<T> Orchestrator<T> {
    /// Detector callback, once per processed frame.
    pub fn on_frame(&self, frame: &Frame) {
        self.on_detection_change(frame.hand_present());
    }

    /// Asks for camera access once. Repeated calls while starting or running
    /// are no-ops.
    pub async fn start_camera<C>(&self, camera: &C) -> Result<(), Notice>
    where
        C: Camera + ?Sized,
    {
        if self.camera() != CameraStatus::Off {
            return Ok(());
        }
        self.camera.set(CameraStatus::Starting);
        match camera.open().await {
            Ok(()) => {
                log::info!("camera running");
                self.camera.set(CameraStatus::Running);
                Ok(())
            }
            Err(e) => {
                log::warn!("camera unavailable: {}", e);
                self.camera.set(CameraStatus::Off);
                Err(Notice::from(e))
            }
        }
    }
}

impl<T> DetectionObserver for Orchestrator<T> {
    fn on_detection_change(&self, present: bool) {
        if present != self.detection.is_present() {
            log::debug!("hand {}", if present { "detected" } else { "lost" });
        }
        self.detection.update(present);
    }
}

/// analyze flow
impl<T> Orchestrator<T>
where
    T: Transport,
{
    /// Opens card entry if a hand is in frame.
    pub fn trigger_analyze(&self) -> Result<(), Notice> {
        match self.phase() {
            Phase::Analyzing => Err(Notice::Busy),
            Phase::CardEntry => Ok(()),
            Phase::Idle | Phase::AnalysisDone if !self.is_present() => Err(Notice::NoHandDetected),
            Phase::Idle | Phase::AnalysisDone => {
                self.transition(Phase::CardEntry);
                Ok(())
            }
        }
    }

    /// Validates the four card fields, analyzes the hand, then asks the
    /// assistant about it.
    ///
    /// On analysis failure the session returns to card entry and the previous
    /// hand stays current. The follow-up question cannot fail this call; its
    /// errors are written into the conversation instead.
    pub async fn submit_cards(
        &self,
        c1_rank: &str,
        c1_suit: &str,
        c2_rank: &str,
        c2_suit: &str,
    ) -> Result<HandResult, Notice> {
        match self.phase() {
            Phase::Analyzing => return Err(Notice::Busy),
            Phase::Idle | Phase::AnalysisDone => return Err(Notice::AwaitingTrigger),
            Phase::CardEntry => {}
        }
        let hand = self.gate.try_submit(c1_rank, c1_suit, c2_rank, c2_suit)?;
        self.transition(Phase::Analyzing);
        let inflight = Inflight::arm(&self.phase);
        let outcome = self.analysis.analyze(hand).await;
        inflight.disarm();
        match outcome {
            Err(e) => {
                log::warn!("analysis of {} failed: {}", hand, e);
                self.transition(Phase::CardEntry);
                Err(Notice::from(e))
            }
            Ok(result) => {
                *self.current.borrow_mut() = Some(result.clone());
                self.transition(Phase::AnalysisDone);
                self.insight(&result).await;
                Ok(result)
            }
        }
    }

    async fn insight(&self, result: &HandResult) {
        let question = insight::prompt(result);
        self.converse(question, Some(result), Some("getting insights")).await;
    }

    fn transition(&self, next: Phase) {
        let prev = self.phase.replace(next);
        log::debug!("{} -> {}", prev, next);
    }
}

/// An analysis in flight.
///
/// Dropping it while still armed returns the session to card entry, so a
/// caller that abandons `submit_cards` mid-request can submit again.
struct Inflight<'a> {
    phase: &'a Cell<Phase>,
    armed: bool,
}

impl<'a> Inflight<'a> {
    fn arm(phase: &'a Cell<Phase>) -> Self {
        Self { phase, armed: true }
    }
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for Inflight<'_> {
    fn drop(&mut self) {
        if self.armed {
            log::debug!("analysis abandoned, back to card entry");
            self.phase.set(Phase::CardEntry);
        }
    }
}

/// chat flow
impl<T> Orchestrator<T>
where
    T: Transport,
{
    /// Sends a user message grounded in the current hand, if any.
    /// Blank messages are ignored.
    pub async fn send_message(&self, text: &str) {
        let message = text.trim();
        if message.is_empty() {
            return;
        }
        let hand = self.current_hand();
        self.converse(message.to_string(), hand.as_ref(), None).await;
    }

    async fn converse(&self, question: String, hand: Option<&HandResult>, context: Option<&str>) {
        let slot = Slot::ask(&self.transcript, question.as_str());
        match self.chat.send(&question, hand).await {
            Ok(reply) => slot.fill(Speaker::Bot, reply),
            Err(e) => {
                log::warn!("assistant unavailable: {}", e);
                slot.fill(Speaker::Bot, insight::apology(context, &e));
            }
        }
    }
}
