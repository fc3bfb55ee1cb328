//! Session mode selector with switch and dropdown presentations.
//!
//! DESIGN
//! ======
//! One logical control: both variants bind the same `(mode, on_set_mode)`
//! pair and the same legal mode set, so behavior cannot drift between the
//! large-screen switch and the compact dropdown. The fork is rendering-only.

use leptos::prelude::*;

use crate::state::session::SessionMode;

#[cfg(test)]
#[path = "session_mode_control_test.rs"]
mod session_mode_control_test;

/// Presentation variant for the mode selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeControlVariant {
    /// Inline two-sided switch, used on large viewports.
    Switch,
    /// Compact dropdown, used on small viewports.
    Dropdown,
}

/// Pick the presentation variant for a viewport class.
pub fn variant_for(big_screen: bool) -> ModeControlVariant {
    if big_screen {
        ModeControlVariant::Switch
    } else {
        ModeControlVariant::Dropdown
    }
}

fn switch_checked(mode: SessionMode) -> bool {
    mode == SessionMode::Finetune
}

fn mode_from_switch(checked: bool) -> SessionMode {
    if checked { SessionMode::Finetune } else { SessionMode::Inference }
}

/// Mode selector bound to the caller's session mode.
#[component]
pub fn SessionModeControl(
    #[prop(into)] mode: Signal<SessionMode>,
    on_set_mode: Callback<SessionMode>,
    #[prop(into)] variant: Signal<ModeControlVariant>,
) -> impl IntoView {
    // Single event path for both presentations.
    let emit = move |next: SessionMode| on_set_mode.run(next);

    view! {
        {move || match variant.get() {
            ModeControlVariant::Switch => {
                view! {
                    <label class="mode-control mode-control--switch">
                        <span class="mode-control__side">{SessionMode::Inference.label()}</span>
                        <input
                            type="checkbox"
                            class="mode-control__toggle"
                            prop:checked=move || switch_checked(mode.get())
                            on:change=move |ev| emit(mode_from_switch(event_target_checked(&ev)))
                        />
                        <span class="mode-control__side">{SessionMode::Finetune.label()}</span>
                    </label>
                }
                    .into_any()
            }
            ModeControlVariant::Dropdown => {
                view! {
                    <select
                        class="mode-control mode-control--dropdown"
                        prop:value=move || mode.get().as_str().to_owned()
                        on:change=move |ev| {
                            if let Some(next) = SessionMode::parse(&event_target_value(&ev)) {
                                emit(next);
                            }
                        }
                    >
                        <option
                            value=SessionMode::Inference.as_str()
                            selected=move || mode.get() == SessionMode::Inference
                        >
                            {SessionMode::Inference.label()}
                        </option>
                        <option
                            value=SessionMode::Finetune.as_str()
                            selected=move || mode.get() == SessionMode::Finetune
                        >
                            {SessionMode::Finetune.label()}
                        </option>
                    </select>
                }
                    .into_any()
            }
        }}
    }
}
