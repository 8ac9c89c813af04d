//! One-shot mount animations.
//!
//! Each variant interpolates opacity plus one transform from a start pose to
//! the identity pose, once, when the element is first displayed. There is no
//! state to track: the browser runs the keyframes and leaves the element at
//! its final pose (`animation-fill-mode: both`).

/// Entrance transition applied to a hero column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountAnimation {
    /// Fade in while rising 10px into place.
    FadeUp,
    /// Fade in while growing from 95% to full size.
    ScaleIn,
}

impl MountAnimation {
    /// Every variant, in stylesheet order.
    pub const ALL: [MountAnimation; 2] = [MountAnimation::FadeUp, MountAnimation::ScaleIn];

    /// Run time of the interpolation.
    pub const fn duration_ms(self) -> u32 {
        600
    }

    /// Delay before the interpolation starts.
    pub const fn delay_ms(self) -> u32 {
        match self {
            MountAnimation::FadeUp => 0,
            MountAnimation::ScaleIn => 50,
        }
    }

    /// CSS class that applies the animation.
    pub const fn class_name(self) -> &'static str {
        match self {
            MountAnimation::FadeUp => "mount-fade-up",
            MountAnimation::ScaleIn => "mount-scale-in",
        }
    }

    fn keyframes_name(self) -> &'static str {
        match self {
            MountAnimation::FadeUp => "cddf-fade-up",
            MountAnimation::ScaleIn => "cddf-scale-in",
        }
    }

    fn start_transform(self) -> &'static str {
        match self {
            MountAnimation::FadeUp => "translateY(10px)",
            MountAnimation::ScaleIn => "scale(0.95)",
        }
    }

    fn end_transform(self) -> &'static str {
        match self {
            MountAnimation::FadeUp => "translateY(0)",
            MountAnimation::ScaleIn => "scale(1)",
        }
    }

    /// `@keyframes` block plus the class rule for this animation.
    pub fn css(self) -> String {
        format!(
            "@keyframes {name} {{\n    from {{ opacity: 0; transform: {from}; }}\n    to {{ opacity: 1; transform: {to}; }}\n}}\n\
.{class} {{\n    animation-name: {name};\n    animation-duration: {duration}ms;\n    animation-delay: {delay}ms;\n    animation-timing-function: ease-out;\n    animation-iteration-count: 1;\n    animation-fill-mode: both;\n}}\n",
            name = self.keyframes_name(),
            from = self.start_transform(),
            to = self.end_transform(),
            class = self.class_name(),
            duration = self.duration_ms(),
            delay = self.delay_ms(),
        )
    }
}

/// CSS for every mount animation, with a reduced-motion override.
pub fn animations_css() -> String {
    let mut css: String = MountAnimation::ALL.iter().map(|a| a.css()).collect();
    let classes = MountAnimation::ALL
        .iter()
        .map(|a| format!(".{}", a.class_name()))
        .collect::<Vec<_>>()
        .join(", ");
    css.push_str(&format!(
        "@media (prefers-reduced-motion: reduce) {{\n    {classes} {{ animation: none; }}\n}}\n"
    ));
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_up_runs_once_without_delay() {
        let css = MountAnimation::FadeUp.css();
        assert!(css.contains("@keyframes cddf-fade-up"));
        assert!(css.contains("translateY(10px)"));
        assert!(css.contains("animation-duration: 600ms"));
        assert!(css.contains("animation-delay: 0ms"));
        assert!(css.contains("animation-iteration-count: 1"));
    }

    #[test]
    fn scale_in_is_delayed() {
        let css = MountAnimation::ScaleIn.css();
        assert!(css.contains("scale(0.95)"));
        assert!(css.contains("animation-delay: 50ms"));
        assert!(css.contains("animation-fill-mode: both"));
    }

    #[test]
    fn reduced_motion_disables_all() {
        let css = animations_css();
        assert!(css.contains("prefers-reduced-motion"));
        assert!(css.contains(".mount-fade-up, .mount-scale-in { animation: none; }"));
    }
}
