//! Timed lifecycle tests for toasts and card fades
//!
//! Run on a paused tokio clock so 3.3 seconds of page time pass instantly.

use std::cell::RefCell;
use std::time::Duration;

use iplantguard_core::{
    drive_toast, run_fade, CardStyle, Timer, ToastKind, ToastPhase, ToastStack, ToastTimings,
};
use tokio::time::sleep;

struct TokioTimer;

impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[tokio::test(start_paused = true)]
async fn test_toast_exists_then_leaves_then_is_removed() {
    let stack = RefCell::new(ToastStack::new());
    let id = stack.borrow_mut().push(ToastKind::Success, "Preferencias guardadas");

    let driver = drive_toast(&TokioTimer, ToastTimings::default(), |step| {
        stack.borrow_mut().apply(id, step)
    });
    let probe = async {
        assert!(stack.borrow().contains(id));

        sleep(ms(2999)).await;
        assert_eq!(stack.borrow().get(id).unwrap().phase, ToastPhase::Showing);

        sleep(ms(2)).await;
        assert_eq!(stack.borrow().get(id).unwrap().phase, ToastPhase::Leaving);

        sleep(ms(300)).await;
        assert!(!stack.borrow().contains(id));
    };

    tokio::join!(driver, probe);
    assert!(stack.borrow().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_toasts_stack_independently() {
    let stack = RefCell::new(ToastStack::new());
    let first = stack.borrow_mut().push(ToastKind::Success, "uno");

    let first_driver = drive_toast(&TokioTimer, ToastTimings::default(), |step| {
        stack.borrow_mut().apply(first, step)
    });
    let second_driver = async {
        sleep(ms(1000)).await;
        let second = stack.borrow_mut().push(ToastKind::Error, "dos");
        assert_eq!(stack.borrow().len(), 2);
        drive_toast(&TokioTimer, ToastTimings::default(), |step| {
            stack.borrow_mut().apply(second, step)
        })
        .await;
    };
    let probe = async {
        sleep(ms(3400)).await;
        let remaining: Vec<_> = stack.borrow().iter().map(|t| t.message.clone()).collect();
        assert_eq!(remaining, vec!["dos".to_string()]);
    };

    tokio::join!(first_driver, second_driver, probe);
    assert!(stack.borrow().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_card_fade_hides_then_reveals_after_delay() {
    let styles = RefCell::new(Vec::new());

    let fade = run_fade(&TokioTimer, ms(150), |style| styles.borrow_mut().push(style));
    let probe = async {
        sleep(ms(149)).await;
        assert_eq!(*styles.borrow(), vec![CardStyle::hidden()]);
        sleep(ms(2)).await;
        assert_eq!(styles.borrow().last(), Some(&CardStyle::revealed()));
    };

    tokio::join!(fade, probe);
    assert_eq!(styles.borrow().len(), 2);
}
