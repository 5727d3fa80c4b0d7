//! Class and style strings computed from pointer position, theme and scroll
//! visibility.

use crate::theme::Theme;

// Literal class names so the tailwind scanner picks them up.
const DELAYS: [&str; 8] = [
    "delay-0", "delay-100", "delay-200", "delay-300", "delay-400", "delay-500", "delay-600",
    "delay-700",
];

/// Reveal classes for children that fade in once their section is on screen.
/// `step` staggers siblings by 100ms each, capped at 700ms.
pub fn reveal(visible: bool, step: usize) -> String {
    let state = if visible {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-8"
    };
    let delay = DELAYS[step.min(DELAYS.len() - 1)];
    format!("transition-all duration-700 {state} {delay}")
}

/// Pointer offset from the centre of the window, each axis in -1.0..=1.0.
pub fn pointer_offset(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let norm = |v: f64, extent: f64| ((v / extent) * 2.0 - 1.0).clamp(-1.0, 1.0);
    (norm(x, width), norm(y, height))
}

/// Pointer position as a percentage of the viewport, for the gradient centre.
pub fn pointer_percent(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (50.0, 50.0);
    }
    (
        (x / width * 100.0).clamp(0.0, 100.0),
        (y / height * 100.0).clamp(0.0, 100.0),
    )
}

pub fn gradient(theme: Theme, (x, y): (f64, f64)) -> String {
    let (glow, base) = match theme {
        Theme::Light => ("rgba(99, 102, 241, 0.15)", "rgba(255, 255, 255, 0)"),
        Theme::Dark => ("rgba(129, 140, 248, 0.12)", "rgba(3, 7, 18, 0)"),
    };
    format!("background: radial-gradient(600px circle at {x:.1}% {y:.1}%, {glow}, {base} 70%)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reveal_staggers() {
        assert!(reveal(true, 0).contains("opacity-100"));
        assert!(reveal(false, 0).contains("opacity-0"));
        assert!(reveal(true, 3).contains("delay-300"));
        assert!(reveal(true, 42).contains("delay-700"));
    }

    #[test]
    fn test_pointer_offset_is_centred() {
        assert_eq!(pointer_offset(500.0, 300.0, 1000.0, 600.0), (0.0, 0.0));
        assert_eq!(pointer_offset(0.0, 0.0, 1000.0, 600.0), (-1.0, -1.0));
        assert_eq!(pointer_offset(1000.0, 600.0, 1000.0, 600.0), (1.0, 1.0));
    }

    #[test]
    fn test_pointer_helpers_without_window_size() {
        // before layout the window can report a zero size
        assert_eq!(pointer_offset(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
        assert_eq!(pointer_percent(10.0, 10.0, 0.0, 0.0), (50.0, 50.0));
    }

    #[test]
    fn test_pointer_percent() {
        assert_eq!(pointer_percent(250.0, 100.0, 1000.0, 400.0), (25.0, 25.0));
        assert_eq!(pointer_percent(-5.0, 900.0, 1000.0, 400.0), (0.0, 100.0));
    }

    #[test]
    fn test_gradient_follows_theme() {
        let light = gradient(Theme::Light, (10.0, 20.0));
        let dark = gradient(Theme::Dark, (10.0, 20.0));
        assert!(light.contains("at 10.0% 20.0%"));
        assert_ne!(light, dark);
    }

    proptest! {
        #[test]
        fn pointer_percent_stays_on_screen(
            x in -5000.0f64..5000.0,
            y in -5000.0f64..5000.0,
            w in 1.0f64..4000.0,
            h in 1.0f64..4000.0,
        ) {
            let (px, py) = pointer_percent(x, y, w, h);
            prop_assert!((0.0..=100.0).contains(&px));
            prop_assert!((0.0..=100.0).contains(&py));
            let (ox, oy) = pointer_offset(x, y, w, h);
            prop_assert!((-1.0..=1.0).contains(&ox));
            prop_assert!((-1.0..=1.0).contains(&oy));
        }
    }
}
