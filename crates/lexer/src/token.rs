use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\n\f]+")] // Ignore spaces, tabs and line breaks automatically
pub enum Token {
    // --- Literals ---

    // Identifiers: the variable, constants and function names (ex: "x", "pi", "sin")
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Numbers keep their source text so the token stays hashable (ex: 42, 3.14, .5)
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_string())]
    #[regex(r"\.[0-9]+", |lex| lex.slice().to_string())]
    Number(String),

    #[token("π")]
    Pi,

    #[token("√")]
    Radical, // Prefix square root (√x, √(x+1))

    // --- Operators ---
    #[token("+")]
    Plus,

    #[token("-")]
    #[token("−")]
    Minus,

    #[token("*")]
    #[token("×")]
    #[token("·")]
    Star,

    #[token("/")]
    #[token("÷")]
    Slash,

    #[token("^")]
    Caret,

    #[token("%")]
    Percent, // Postfix percent (50% = 0.5)

    // --- Delimiters ---
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,
}

// This helps to show the token prettily in the print
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Number(text) => write!(f, "{}", text),
            Token::Pi => write!(f, "π"),
            Token::Radical => write!(f, "√"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::Percent => write!(f, "%"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}
