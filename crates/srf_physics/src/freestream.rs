// crates/srf_physics/src/freestream.rs

//! 来流速度检测
//!
//! 以内部场第一个值作为来流速度 U∞，并检查其余单元是否与之相同。
//! 不均匀只产生一条警告，不影响返回值。

use tracing::warn;

use crate::error::{PhysicsError, PhysicsResult};
use crate::types::VelocityVector;

/// 检测结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeStream {
    /// 来流速度（内部场第一个值）
    pub velocity: VelocityVector,
    /// 内部场是否均匀
    pub uniform: bool,
    /// 第一个与来流不同的单元
    pub first_mismatch: Option<usize>,
}

/// 检测来流速度（严格相等比较）
pub fn detect_free_stream(internal: &[VelocityVector]) -> PhysicsResult<FreeStream> {
    detect_free_stream_with_tolerance(internal, 0.0)
}

/// 检测来流速度
///
/// `tolerance` 为逐分量绝对容差，`0.0` 表示严格相等。
/// 负数或非有限容差返回 [`PhysicsError::InvalidTolerance`]。
pub fn detect_free_stream_with_tolerance(
    internal: &[VelocityVector],
    tolerance: f64,
) -> PhysicsResult<FreeStream> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(PhysicsError::InvalidTolerance(tolerance));
    }
    let &velocity = internal.first().ok_or(PhysicsError::EmptyField)?;

    let differs = |v: &VelocityVector| {
        if tolerance > 0.0 {
            !(*v - velocity).abs().cmple(VelocityVector::splat(tolerance)).all()
        } else {
            *v != velocity
        }
    };

    let first_mismatch = internal.iter().position(differs);
    if let Some(cell) = first_mismatch {
        warn!("NOTE: 内部场不均匀 (non-uniform internal field), 首个差异单元 {}", cell);
    }

    Ok(FreeStream {
        velocity,
        uniform: first_mismatch.is_none(),
        first_mismatch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    /// 统计 WARN 事件数
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn count_warnings(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(Arc::clone(&count)));
        tracing::subscriber::with_default(subscriber, f);
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn test_uniform_field() {
        let v = DVec3::new(10.0, 0.0, 0.0);
        let fs = detect_free_stream(&[v; 5]).unwrap();
        assert_eq!(fs.velocity, v);
        assert!(fs.uniform);
        assert_eq!(fs.first_mismatch, None);
    }

    #[test]
    fn test_single_cell() {
        let fs = detect_free_stream(&[DVec3::Y]).unwrap();
        assert_eq!(fs.velocity, DVec3::Y);
        assert!(fs.uniform);
    }

    #[test]
    fn test_non_uniform_returns_first() {
        let internal = [DVec3::X, DVec3::X, DVec3::Y, DVec3::Z];
        let fs = detect_free_stream(&internal).unwrap();
        assert_eq!(fs.velocity, DVec3::X);
        assert!(!fs.uniform);
        assert_eq!(fs.first_mismatch, Some(2));
    }

    #[test]
    fn test_exact_equality_by_default() {
        let internal = [DVec3::X, DVec3::new(1.0 + 1e-15, 0.0, 0.0)];
        assert!(!detect_free_stream(&internal).unwrap().uniform);
        assert!(detect_free_stream_with_tolerance(&internal, 1e-12).unwrap().uniform);
    }

    #[test]
    fn test_tolerance_still_detects_large_difference() {
        let internal = [DVec3::X, DVec3::new(1.0, 0.1, 0.0)];
        let fs = detect_free_stream_with_tolerance(&internal, 1e-6).unwrap();
        assert!(!fs.uniform);
        assert_eq!(fs.first_mismatch, Some(1));
    }

    #[test]
    fn test_uniform_field_no_warning() {
        let v = DVec3::new(3.0, -1.0, 0.5);
        let warnings = count_warnings(|| {
            detect_free_stream(&[v; 5]).unwrap();
        });
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_non_uniform_warns_once() {
        let internal = [DVec3::X, DVec3::Y, DVec3::Z, DVec3::Y];
        let warnings = count_warnings(|| {
            let fs = detect_free_stream(&internal).unwrap();
            assert_eq!(fs.first_mismatch, Some(1));
        });
        assert_eq!(warnings, 1);
    }

    #[test]
    fn test_invalid_tolerance() {
        let internal = [DVec3::X, DVec3::Y];
        for tol in [-1e-6, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                detect_free_stream_with_tolerance(&internal, tol),
                Err(PhysicsError::InvalidTolerance(_))
            ));
        }
    }

    #[test]
    fn test_empty_field() {
        assert!(matches!(detect_free_stream(&[]), Err(PhysicsError::EmptyField)));
    }
}
