//! Presentation primitives rendered as plain text.
//!
//! Each component is typed display data with a `Display` impl and no
//! behaviour of its own.

use std::fmt;

use orgdesk_core::models::organization::OrganizationStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
    Outline,
    Gradient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn padding(&self) -> usize {
        match self {
            ButtonSize::Sm => 0,
            ButtonSize::Md => 1,
            ButtonSize::Lg => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub loading: bool,
    pub disabled: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            loading: false,
            disabled: false,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// A loading button is also disabled.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_interactive(&self) -> bool {
        !(self.loading || self.disabled)
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = match self.variant {
            ButtonVariant::Primary | ButtonVariant::Secondary => ("[", "]"),
            ButtonVariant::Danger => ("[!", "!]"),
            ButtonVariant::Ghost => (" ", " "),
            ButtonVariant::Outline => ("(", ")"),
            ButtonVariant::Gradient => ("[*", "*]"),
        };
        let pad = " ".repeat(self.size.padding());
        let label = if self.loading {
            format!("{}...", self.label)
        } else {
            self.label.clone()
        };
        write!(f, "{open}{pad}{label}{pad}{close}")?;
        if self.disabled && !self.loading {
            f.write_str(" (disabled)")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Input {
    pub label: Option<String>,
    pub value: String,
    pub placeholder: Option<String>,
    pub error: Option<String>,
    pub icon: Option<char>,
    /// Render the value as bullets.
    pub masked: bool,
}

impl Input {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    pub fn icon(mut self, icon: char) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(icon) = self.icon {
            write!(f, "{icon} ")?;
        }
        if let Some(label) = &self.label {
            write!(f, "{label}: ")?;
        }
        if self.value.is_empty() {
            if let Some(placeholder) = &self.placeholder {
                write!(f, "<{placeholder}>")?;
            }
        } else if self.masked {
            f.write_str(&"*".repeat(self.value.chars().count()))?;
        } else {
            f.write_str(&self.value)?;
        }
        if let Some(error) = &self.error {
            write!(f, "\n  ! {error}")?;
        }
        Ok(())
    }
}

/// Dialog frame. Renders nothing while closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalShell {
    pub open: bool,
    pub title: String,
    pub content: String,
}

impl fmt::Display for ModalShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.open {
            return Ok(());
        }
        let width = self
            .content
            .lines()
            .map(|l| l.chars().count())
            .chain(std::iter::once(self.title.chars().count() + 4))
            .max()
            .unwrap_or(0);
        let rule = "=".repeat(width + 4);
        writeln!(f, "{rule}")?;
        writeln!(f, "| {}  [x]", self.title)?;
        writeln!(f, "{rule}")?;
        for line in self.content.lines() {
            writeln!(f, "| {line}")?;
        }
        write!(f, "{rule}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub status: OrganizationStatus,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.status {
            OrganizationStatus::Active => '+',
            OrganizationStatus::Inactive => '-',
            OrganizationStatus::Pending => '~',
        };
        write!(f, "{marker}{}", self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Card {
    pub title: Option<String>,
    pub body: String,
}

impl Card {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            title: None,
            body: body.into(),
        }
    }

    pub fn titled(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: body.into(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+---")?;
        if let Some(title) = &self.title {
            writeln!(f, "| {title}")?;
            writeln!(f, "|")?;
        }
        for line in self.body.lines() {
            writeln!(f, "| {line}")?;
        }
        write!(f, "+---")
    }
}
