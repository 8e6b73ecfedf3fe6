//! Theme State
//!
//! Reactive light/dark flag, mirrored onto the `dark` class of the document
//! root so Tailwind's `dark:` variants follow it.

use leptos::*;

use early_warning::Theme;

/// Theme context provided to all components
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
}

impl ThemeState {
    pub fn toggle(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark()
    }
}

/// Provide the theme context and keep the document class in sync
pub fn provide_theme_state(initial: Theme) {
    let state = ThemeState {
        theme: create_rw_signal(initial),
    };

    create_effect(move |_| {
        let theme = state.theme.get();
        apply_theme_class(theme);
    });

    provide_context(state);
}

fn apply_theme_class(theme: Theme) {
    let Some(root) = document().document_element() else {
        tracing::warn!("No document element, theme class not applied");
        return;
    };
    let classes = root.class_list();
    let result = if theme.is_dark() {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if let Err(err) = result {
        tracing::warn!("Failed to apply {} theme: {:?}", theme, err);
    }
}
