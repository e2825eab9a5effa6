use super::frame::Frame;
use futures::StreamExt;
use futures::channel::mpsc::Receiver;
use futures::channel::mpsc::Sender;

/// Anything that wants the per-frame presence signal.
///
/// Called once per processed frame, whether or not the value changed.
pub trait DetectionObserver {
    fn on_detection_change(&self, present: bool);
}

/// Bounded frame queue between the detector callback and the coach.
/// Senders wait once [`crate::FRAME_BUFFER`] frames are queued.
pub fn channel() -> (Sender<Frame>, Receiver<Frame>) {
    futures::channel::mpsc::channel(crate::FRAME_BUFFER)
}

/// Drain frames into the observer until every sender is dropped.
/// Returns how many frames were delivered.
pub async fn pump<O>(mut frames: Receiver<Frame>, observer: &O) -> usize
where
    O: DetectionObserver + ?Sized,
{
    let mut n = 0;
    while let Some(frame) = frames.next().await {
        observer.on_detection_change(frame.hand_present());
        n += 1;
    }
    log::debug!("detector stream closed after {} frames", n);
    n
}
