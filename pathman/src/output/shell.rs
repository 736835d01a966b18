//! Shell detection and the `PATH` integration snippet.

use crate::Result;

/// Supported shell families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    /// Bourne Again Shell (bash).
    Bash,
    /// Z Shell (zsh).
    Zsh,
    /// POSIX sh and other Bourne-compatible shells.
    Sh,
    /// Friendly Interactive Shell (fish).
    Fish,
}

const POSIX_SCRIPT: &str = r#"if command -v pathman >/dev/null 2>&1; then
  PATHMAN_CMD=pathman
elif [ -x "$HOME/.local/pathman/bin/pathman" ]; then
  PATHMAN_CMD="$HOME/.local/pathman/bin/pathman"
fi

if [ -n "$PATHMAN_CMD" ]; then
  # Calculate a new $PATH from the old one and pathman's configuration.
  NEW_PATH=$("$PATHMAN_CMD" path 2>/dev/null)
  if [ $? -eq 0 ] && [ -n "$NEW_PATH" ]; then
    export PATH="$NEW_PATH"
  elif [ -n "$PS1" ]; then
    # PS1 is only set in interactive shells - safe to show errors here.
    echo "Warning: pathman failed to update PATH" >&2
  fi
elif [ -n "$PS1" ]; then
  # PS1 is only set in interactive shells - safe to show errors here.
  echo "Warning: pathman not found, PATH not updated" >&2
fi
"#;

const FISH_SCRIPT: &str = r#"if command -q pathman
  set -g PATHMAN_CMD pathman
else if test -x "$HOME/.local/pathman/bin/pathman"
  set -g PATHMAN_CMD "$HOME/.local/pathman/bin/pathman"
end

if set -q PATHMAN_CMD
  # Calculate a new $PATH from the old one and pathman's configuration.
  set -l new_path ($PATHMAN_CMD path 2>/dev/null)
  if test $status -eq 0; and test -n "$new_path"
    set -gx PATH (string split ':' -- $new_path)
  else if status is-interactive
    echo "Warning: pathman failed to update PATH" >&2
  end
else if status is-interactive
  echo "Warning: pathman not found, PATH not updated" >&2
end
"#;

impl ShellType {
    /// Picks the shell family from the value of `$SHELL`.
    ///
    /// Anything unrecognised, or no value at all, is treated as sh.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathman::output::ShellType;
    ///
    /// assert_eq!(ShellType::from_shell_var(Some("/usr/bin/fish")), ShellType::Fish);
    /// assert_eq!(ShellType::from_shell_var(Some("/bin/bash")), ShellType::Bash);
    /// assert_eq!(ShellType::from_shell_var(None), ShellType::Sh);
    /// ```
    #[must_use]
    pub fn from_shell_var(shell: Option<&str>) -> Self {
        match shell {
            Some(s) if s.contains("fish") => Self::Fish,
            Some(s) if s.contains("zsh") => Self::Zsh,
            Some(s) if s.contains("bash") => Self::Bash,
            _ => Self::Sh,
        }
    }

    /// Parse a shell type from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell name is not recognized.
    pub fn from_string(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            "sh" | "dash" | "ksh" => Ok(Self::Sh),
            "fish" => Ok(Self::Fish),
            _ => Err(crate::Error::Validation {
                field: "shell".to_string(),
                message: format!("unknown shell type '{s}': supported shells are bash, zsh, sh, fish"),
            }),
        }
    }

    /// True for bash, the only shell whose profile `init` offers to edit.
    #[must_use]
    pub const fn is_bash(self) -> bool {
        matches!(self, Self::Bash)
    }

    /// The snippet that sets `PATH` from `pathman path` at shell startup.
    ///
    /// Every line ends with a newline.
    #[must_use]
    pub const fn integration_script(self) -> &'static str {
        match self {
            Self::Bash | Self::Zsh | Self::Sh => POSIX_SCRIPT,
            Self::Fish => FISH_SCRIPT,
        }
    }
}
