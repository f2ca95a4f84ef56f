use std::time::Duration;

use gpui::{App, ElementId, Rgba, Window};
use gpui_transitions::Transition;

use crate::ElementIdExt;

/// Keyed transition toward a goal picked from `condition => value`
/// branches, ending with `_ => value`. A plain value also works.
///
/// The transition is created on first use and retargeted whenever the
/// picked goal changes.
#[macro_export]
macro_rules! conditional_transition {
    ($id:expr, $window:expr, $cx:expr, $duration:expr, $($goal:tt)+) => {{
        use gpui_transitions::WindowUseTransition;

        let goal = $crate::conditional_transition_branches!(@start [ $($goal)+ ]);
        let transition = $window
            .use_keyed_transition($id, $cx, $duration, |_window, _cx| goal)
            .with_easing(gpui::ease_out_quint());

        if transition.read_goal($cx) != &goal {
            transition.update($cx, |this, _cx| *this = goal);
            $cx.notify(transition.entity_id());
        }

        transition
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! conditional_transition_branches {
    (@start [ { $($branches:tt)+ } ]) => {
        $crate::conditional_transition_branches!(@branch [ $($branches)+ ])
    };
    (@start [ $value:expr ]) => {
        $value
    };

    (@branch [ _ => $value:expr ]) => {
        $value
    };
    (@branch [ _ => $value:expr, $($rest:tt)+ ]) => {
        compile_error!("`_ => value` must be the last branch")
    };
    (@branch [ $cond:expr => $value:expr ]) => {
        compile_error!("missing a final `_ => value` branch")
    };
    (@branch [ $cond:expr => $value:expr, $($rest:tt)+ ]) => {
        if $cond {
            $value
        } else {
            $crate::conditional_transition_branches!(@branch [ $($rest)+ ])
        }
    };
}

/// Opacity that dims disabled controls.
pub fn disabled_transition(
    id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_disabled: bool,
) -> Transition<f32> {
    conditional_transition!(
        id.into().with_suffix("state:transition:disabled"),
        window,
        cx,
        Duration::from_millis(365),
        {
            is_disabled => 0.45,
            _ => 1.
        }
    )
}

/// Goes from 0 to 1 as a check mark fills in.
pub fn checked_transition(
    id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    duration: Duration,
    is_checked: bool,
) -> Transition<f32> {
    conditional_transition!(
        id.into().with_suffix("state:checked"),
        window,
        cx,
        duration,
        {
            is_checked => 1.,
            _ => 0.
        }
    )
}

/// Fades a whole cluster in or out.
pub fn visibility_transition(
    id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_visible: bool,
) -> Transition<f32> {
    conditional_transition!(
        id.into().with_suffix("state:transition:visibility"),
        window,
        cx,
        Duration::from_millis(250),
        {
            is_visible => 1.,
            _ => 0.
        }
    )
}

/// Border colors of a selectable card. Selection wins over hover.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectableBorder {
    pub rest: Rgba,
    pub hover: Rgba,
    pub selected: Rgba,
}

impl SelectableBorder {
    pub fn goal(&self, is_hover: bool, is_selected: bool) -> Rgba {
        match (is_selected, is_hover) {
            (true, _) => self.selected,
            (false, true) => self.hover,
            (false, false) => self.rest,
        }
    }

    pub fn transition(
        &self,
        id: impl Into<ElementId>,
        window: &mut Window,
        cx: &mut App,
        is_hover: bool,
        is_selected: bool,
    ) -> Transition<Rgba> {
        conditional_transition!(
            id.into().with_suffix("state:transition:border_color"),
            window,
            cx,
            Duration::from_millis(300),
            self.goal(is_hover, is_selected)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::rgb_a;

    #[test]
    fn test_selection_wins_over_hover() {
        let border = SelectableBorder {
            rest: rgb_a(0x111111, 1.),
            hover: rgb_a(0x222222, 1.),
            selected: rgb_a(0x6E5BFF, 1.),
        };

        assert_eq!(border.goal(true, true), border.selected);
        assert_eq!(border.goal(false, true), border.selected);
        assert_eq!(border.goal(true, false), border.hover);
        assert_eq!(border.goal(false, false), border.rest);
    }

    #[test]
    fn test_branches_pick_first_true_condition() {
        let pick = |a: bool, b: bool| -> u8 {
            conditional_transition_branches!(@start [ { a => 1, b => 2, _ => 3 } ])
        };

        assert_eq!(pick(true, true), 1);
        assert_eq!(pick(false, true), 2);
        assert_eq!(pick(false, false), 3);
    }
}
