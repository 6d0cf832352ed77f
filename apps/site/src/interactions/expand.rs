/// Number of bullets an experience entry shows before collapsing the rest.
pub const VISIBLE_BULLETS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandState {
    Closed,
    Open,
}

impl ExpandState {
    /// Value of the button's `data-state` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            ExpandState::Closed => "closed",
            ExpandState::Open => "open",
        }
    }
}

/// The "Show more" button paired with a hidden bullet sublist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandControl {
    pub state: ExpandState,
    pub hidden_count: usize,
}

impl ExpandControl {
    pub fn closed(hidden_count: usize) -> Self {
        Self {
            state: ExpandState::Closed,
            hidden_count,
        }
    }

    pub fn label(&self) -> String {
        match self.state {
            ExpandState::Closed => format!("Show more ({})", self.hidden_count),
            ExpandState::Open => "Show less".to_string(),
        }
    }

    pub fn list_hidden(&self) -> bool {
        self.state == ExpandState::Closed
    }

    /// Flips the control. The browser scrolls the list into view when it
    /// collapses.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            ExpandState::Closed => ExpandState::Open,
            ExpandState::Open => ExpandState::Closed,
        };
    }

    /// Button attributes carrying both labels, so the script swaps text
    /// without knowing how labels are worded.
    pub fn data_attrs(&self) -> String {
        let mut other = self.clone();
        other.toggle();
        let (open, closed) = match self.state {
            ExpandState::Closed => (other.label(), self.label()),
            ExpandState::Open => (self.label(), other.label()),
        };
        format!(
            r#"data-state="{}" data-label-open="{open}" data-label-closed="{closed}""#,
            self.state.as_attr()
        )
    }
}
