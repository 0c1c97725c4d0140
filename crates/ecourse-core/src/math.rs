//! LaTeX to Unicode approximation for terminal display
//!
//! Covers the subset used by the course formulas: Greek letters, big
//! operators, named functions, fractions, delimiters and sub/superscripts.
//! Unknown commands lose their backslash and are shown by name.

/// Convert a LaTeX math expression to a single line of Unicode text
pub fn to_unicode(tex: &str) -> String {
    let mut converter = Converter {
        chars: tex.chars().collect(),
        pos: 0,
    };
    let raw = converter.sequence(false);
    collapse_whitespace(&raw)
}

struct Converter {
    chars: Vec<char>,
    pos: usize,
}

impl Converter {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Convert until end of input, or until the closing brace of a group
    fn sequence(&mut self, in_group: bool) -> String {
        let mut out = String::new();
        while let Some(c) = self.next_char() {
            match c {
                '}' if in_group => return out,
                '{' => out.push_str(&self.sequence(true)),
                '}' | '&' => {}
                '\\' => out.push_str(&self.command()),
                '^' => out.push_str(&self.script(Script::Super)),
                '_' => out.push_str(&self.script(Script::Sub)),
                '~' => out.push(' '),
                c => out.push(c),
            }
        }
        out
    }

    /// Single argument of a command or script: a group, a command or one char
    fn argument(&mut self) -> String {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
        match self.next_char() {
            Some('{') => self.sequence(true),
            Some('\\') => self.command(),
            Some(c) => c.to_string(),
            None => String::new(),
        }
    }

    fn script(&mut self, kind: Script) -> String {
        let arg = self.argument();
        let compact: String = arg.chars().filter(|c| !c.is_whitespace()).collect();

        if let Some(mapped) = compact
            .chars()
            .map(|c| kind.map(c))
            .collect::<Option<String>>()
            .filter(|s| !s.is_empty())
        {
            return mapped;
        }

        let marker = kind.marker();
        if compact.chars().count() == 1 {
            format!("{marker}{compact}")
        } else {
            format!("{marker}({compact})")
        }
    }

    fn command(&mut self) -> String {
        let Some(first) = self.next_char() else {
            return String::new();
        };

        if !first.is_ascii_alphabetic() {
            return match first {
                ',' | ';' | ':' | ' ' | '\\' => " ".to_string(),
                '!' => String::new(),
                '|' => "‖".to_string(),
                c => c.to_string(),
            };
        }

        let mut name = String::from(first);
        while let Some(c) = self.peek().filter(char::is_ascii_alphabetic) {
            name.push(c);
            self.pos += 1;
        }

        // A space that only terminates the command name is not output
        if self.peek() == Some(' ')
            && self
                .chars
                .get(self.pos + 1)
                .is_some_and(char::is_ascii_alphanumeric)
        {
            self.pos += 1;
        }

        match name.as_str() {
            "left" | "right" | "big" | "Big" | "bigl" | "bigr" | "Bigl" | "Bigr" => {
                if self.peek() == Some('.') {
                    self.pos += 1;
                }
                String::new()
            }
            "frac" | "dfrac" | "tfrac" => {
                let numerator = self.argument();
                let denominator = self.argument();
                format!("{}/{}", wrap(&numerator), wrap(&denominator))
            }
            "sqrt" => format!("√{}", wrap(&self.argument())),
            "text" | "mathrm" | "mathit" | "mathbf" | "operatorname" | "boldsymbol" => {
                self.argument()
            }
            "mathbb" => {
                let arg = self.argument();
                match arg.as_str() {
                    "R" => "ℝ".to_string(),
                    "E" => "𝔼".to_string(),
                    "N" => "ℕ".to_string(),
                    "Z" => "ℤ".to_string(),
                    "Q" => "ℚ".to_string(),
                    _ => arg,
                }
            }
            "hat" => accent(&self.argument(), '\u{0302}'),
            "tilde" => accent(&self.argument(), '\u{0303}'),
            "bar" | "overline" => accent(&self.argument(), '\u{0304}'),
            "quad" | "qquad" => " ".to_string(),
            other => match symbol(other) {
                Some(s) => s.to_string(),
                None => other.to_string(),
            },
        }
    }
}

#[derive(Clone, Copy)]
enum Script {
    Super,
    Sub,
}

impl Script {
    fn marker(self) -> char {
        match self {
            Script::Super => '^',
            Script::Sub => '_',
        }
    }

    fn map(self, c: char) -> Option<char> {
        match self {
            Script::Super => superscript(c),
            Script::Sub => subscript(c),
        }
    }
}

fn wrap(part: &str) -> String {
    let part = part.trim();
    if part.chars().count() <= 1 {
        part.to_string()
    } else {
        format!("({part})")
    }
}

fn accent(base: &str, mark: char) -> String {
    let mut out = base.to_string();
    out.push(mark);
    out
}

fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn symbol(name: &str) -> Option<&'static str> {
    let s = match name {
        "alpha" => "α",
        "beta" => "β",
        "gamma" => "γ",
        "delta" => "δ",
        "epsilon" | "varepsilon" => "ε",
        "zeta" => "ζ",
        "eta" => "η",
        "theta" | "vartheta" => "θ",
        "iota" => "ι",
        "kappa" => "κ",
        "lambda" => "λ",
        "mu" => "μ",
        "nu" => "ν",
        "xi" => "ξ",
        "pi" => "π",
        "rho" => "ρ",
        "sigma" => "σ",
        "tau" => "τ",
        "upsilon" => "υ",
        "phi" | "varphi" => "φ",
        "chi" => "χ",
        "psi" => "ψ",
        "omega" => "ω",
        "Gamma" => "Γ",
        "Delta" => "Δ",
        "Theta" => "Θ",
        "Lambda" => "Λ",
        "Xi" => "Ξ",
        "Pi" => "Π",
        "Sigma" => "Σ",
        "Phi" => "Φ",
        "Psi" => "Ψ",
        "Omega" => "Ω",
        "sum" => "Σ",
        "prod" => "∏",
        "int" => "∫",
        "partial" => "∂",
        "nabla" => "∇",
        "infty" => "∞",
        "cdot" => "·",
        "times" => "×",
        "pm" => "±",
        "leq" | "le" => "≤",
        "geq" | "ge" => "≥",
        "neq" | "ne" => "≠",
        "approx" => "≈",
        "sim" => "~",
        "equiv" => "≡",
        "in" => "∈",
        "to" | "rightarrow" => "→",
        "leftarrow" => "←",
        "Rightarrow" | "implies" => "⇒",
        "ldots" | "dots" | "cdots" => "…",
        "prime" => "′",
        "max" => "max",
        "min" => "min",
        "cos" => "cos",
        "sin" => "sin",
        "tan" => "tan",
        "log" => "log",
        "ln" => "ln",
        "exp" => "exp",
        "lim" => "lim",
        "arg" => "arg",
        "det" => "det",
        _ => return None,
    };
    Some(s)
}

fn superscript(c: char) -> Option<char> {
    let mapped = match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' => '⁻',
        '=' => '⁼',
        '(' => '⁽',
        ')' => '⁾',
        '*' => '*',
        '\'' | '′' => '′',
        'a' => 'ᵃ',
        'b' => 'ᵇ',
        'c' => 'ᶜ',
        'd' => 'ᵈ',
        'e' => 'ᵉ',
        'f' => 'ᶠ',
        'g' => 'ᵍ',
        'h' => 'ʰ',
        'i' => 'ⁱ',
        'j' => 'ʲ',
        'k' => 'ᵏ',
        'l' => 'ˡ',
        'm' => 'ᵐ',
        'n' => 'ⁿ',
        'o' => 'ᵒ',
        'p' => 'ᵖ',
        'r' => 'ʳ',
        's' => 'ˢ',
        't' => 'ᵗ',
        'u' => 'ᵘ',
        'v' => 'ᵛ',
        'w' => 'ʷ',
        'x' => 'ˣ',
        'y' => 'ʸ',
        'z' => 'ᶻ',
        'T' => 'ᵀ',
        'β' => 'ᵝ',
        'γ' => 'ᵞ',
        'δ' => 'ᵟ',
        'θ' => 'ᶿ',
        'φ' => 'ᵠ',
        'χ' => 'ᵡ',
        _ => return None,
    };
    Some(mapped)
}

fn subscript(c: char) -> Option<char> {
    let mapped = match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        '+' => '₊',
        '-' => '₋',
        '=' => '₌',
        '(' => '₍',
        ')' => '₎',
        'a' => 'ₐ',
        'e' => 'ₑ',
        'h' => 'ₕ',
        'i' => 'ᵢ',
        'j' => 'ⱼ',
        'k' => 'ₖ',
        'l' => 'ₗ',
        'm' => 'ₘ',
        'n' => 'ₙ',
        'o' => 'ₒ',
        'p' => 'ₚ',
        'r' => 'ᵣ',
        's' => 'ₛ',
        't' => 'ₜ',
        'u' => 'ᵤ',
        'v' => 'ᵥ',
        'x' => 'ₓ',
        'β' => 'ᵦ',
        'γ' => 'ᵧ',
        'ρ' => 'ᵨ',
        'φ' => 'ᵩ',
        'χ' => 'ᵪ',
        _ => return None,
    };
    Some(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garch_variance_equation() {
        let tex = r"\sigma_t^2 = \omega + \sum_{i=1}^p \alpha_i \epsilon_{t-i}^2";
        assert_eq!(to_unicode(tex), "σₜ² = ω + Σᵢ₌₁ᵖ αᵢ εₜ₋ᵢ²");
    }

    #[test]
    fn test_nardl_decomposition() {
        assert_eq!(to_unicode(r"x_t = x_0 + x_t^+ + x_t^-"), "xₜ = x₀ + xₜ⁺ + xₜ⁻");
        assert_eq!(
            to_unicode(r"\max(\Delta x_i, 0)"),
            "max(Δxᵢ, 0)"
        );
    }

    #[test]
    fn test_fraction_and_delimiters() {
        let tex = r"\cos\left(\frac{2\pi kt}{T}\right)";
        assert_eq!(to_unicode(tex), "cos((2πkt)/T)");
        assert_eq!(to_unicode(r"\frac{a}{b}"), "a/b");
    }

    #[test]
    fn test_unmappable_script_falls_back() {
        assert_eq!(to_unicode(r"Q_{\tau}"), "Q_τ");
        assert_eq!(to_unicode(r"y_{t,i}"), "y_(t,i)");
        assert_eq!(to_unicode(r"e^{i\omega}"), "e^(iω)");
    }

    #[test]
    fn test_vecm_with_prime_and_uppercase_greek() {
        let tex = r"\Delta Y_t = \alpha\beta'Y_{t-1} + \sum_{i=1}^{p-1}\Gamma_i\Delta Y_{t-i}";
        assert_eq!(to_unicode(tex), "ΔYₜ = αβ'Yₜ₋₁ + Σᵢ₌₁ᵖ⁻¹ΓᵢΔYₜ₋ᵢ");
    }

    #[test]
    fn test_multiline_input_is_collapsed() {
        assert_eq!(to_unicode("\n        H_t = D_t R_t D_t\n        "), "Hₜ = Dₜ Rₜ Dₜ");
    }

    #[test]
    fn test_unknown_command_keeps_name() {
        assert_eq!(to_unicode(r"\foo + 1"), "foo + 1");
        assert_eq!(to_unicode(r"a \, b"), "a b");
    }
}
