use ratatui::style::{Color, Modifier, Style};

#[derive(Clone, Debug)]
pub struct Theme {
    pub fg: Color,
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub selection: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            primary: Color::Blue,
            accent: Color::Green,
            muted: Color::DarkGray,
            selection: Color::Cyan,
            warning: Color::Red,
        }
    }
}

impl Theme {
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }
    pub fn normal_style(&self) -> Style { Style::default().fg(self.fg) }
    pub fn muted_style(&self) -> Style { Style::default().fg(self.muted) }
    pub fn selection_style(&self) -> Style { Style::default().fg(self.selection).add_modifier(Modifier::BOLD) }
    pub fn toast_style(&self) -> Style { Style::default().fg(self.accent).add_modifier(Modifier::BOLD) }
    pub fn warning_style(&self) -> Style { Style::default().fg(self.warning).add_modifier(Modifier::BOLD) }
}
