//! Event Handlers
//!
//! Catalogue of markup event-handler attributes, grouped by event category.

/// Event category of a handler attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerCategory {
    Clipboard,
    Composition,
    Keyboard,
    Focus,
    Form,
    Mouse,
    Selection,
    Touch,
    Ui,
    Wheel,
    Media,
    Image,
    Animation,
    Transition,
}

impl HandlerCategory {
    pub const ALL: [HandlerCategory; 14] = [
        Self::Clipboard,
        Self::Composition,
        Self::Keyboard,
        Self::Focus,
        Self::Form,
        Self::Mouse,
        Self::Selection,
        Self::Touch,
        Self::Ui,
        Self::Wheel,
        Self::Media,
        Self::Image,
        Self::Animation,
        Self::Transition,
    ];

    /// Handler attribute names in this category
    pub fn handlers(self) -> &'static [&'static str] {
        match self {
            Self::Clipboard => &["onCopy", "onCut", "onPaste"],
            Self::Composition => &["onCompositionEnd", "onCompositionStart", "onCompositionUpdate"],
            Self::Keyboard => &["onKeyDown", "onKeyPress", "onKeyUp"],
            Self::Focus => &["onFocus", "onBlur"],
            Self::Form => &["onChange", "onInput", "onSubmit"],
            Self::Mouse => &[
                "onClick",
                "onContextMenu",
                "onDblClick",
                "onDoubleClick",
                "onDrag",
                "onDragEnd",
                "onDragEnter",
                "onDragExit",
                "onDragLeave",
                "onDragOver",
                "onDragStart",
                "onDrop",
                "onMouseDown",
                "onMouseEnter",
                "onMouseLeave",
                "onMouseMove",
                "onMouseOut",
                "onMouseOver",
                "onMouseUp",
            ],
            Self::Selection => &["onSelect"],
            Self::Touch => &["onTouchCancel", "onTouchEnd", "onTouchMove", "onTouchStart"],
            Self::Ui => &["onScroll"],
            Self::Wheel => &["onWheel"],
            Self::Media => &[
                "onAbort",
                "onCanPlay",
                "onCanPlayThrough",
                "onDurationChange",
                "onEmptied",
                "onEncrypted",
                "onEnded",
                "onLoadedData",
                "onLoadedMetadata",
                "onLoadStart",
                "onPause",
                "onPlay",
                "onPlaying",
                "onProgress",
                "onRateChange",
                "onSeeked",
                "onSeeking",
                "onStalled",
                "onSuspend",
                "onTimeUpdate",
                "onVolumeChange",
                "onWaiting",
            ],
            Self::Image => &["onLoad", "onError"],
            Self::Animation => &["onAnimationStart", "onAnimationEnd", "onAnimationIteration"],
            Self::Transition => &["onTransitionEnd"],
        }
    }
}

/// Categories whose handlers only make sense on interactive elements
pub const INTERACTION_CATEGORIES: [HandlerCategory; 4] = [
    HandlerCategory::Focus,
    HandlerCategory::Image,
    HandlerCategory::Keyboard,
    HandlerCategory::Mouse,
];

/// Default interaction-only handler set
pub fn interaction_handlers() -> Vec<&'static str> {
    INTERACTION_CATEGORIES
        .iter()
        .flat_map(|c| c.handlers().iter().copied())
        .collect()
}

/// Category of a handler attribute, ignoring case
pub fn category_of(name: &str) -> Option<HandlerCategory> {
    HandlerCategory::ALL
        .into_iter()
        .find(|c| c.handlers().iter().any(|h| h.eq_ignore_ascii_case(name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_of() {
        assert_eq!(category_of("onclick"), Some(HandlerCategory::Mouse));
        assert_eq!(category_of("onLoad"), Some(HandlerCategory::Image));
        assert_eq!(category_of("onScroll"), Some(HandlerCategory::Ui));
        assert_eq!(category_of("onFoo"), None);
    }

    #[test]
    fn test_interaction_handlers() {
        let handlers = interaction_handlers();
        for name in ["onClick", "onKeyUp", "onFocus", "onError"] {
            assert!(handlers.contains(&name), "missing {}", name);
        }
        assert!(!handlers.contains(&"onChange"));
        assert!(!handlers.contains(&"onScroll"));
    }
}
