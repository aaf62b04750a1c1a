pub const OP_ZERO_FILL_SHIFT_ASSIGN: &str = ">>>=";

pub const OP_STRICT_EQ: &str = "===";
pub const OP_STRICT_NEQ: &str = "!==";
pub const OP_ZERO_FILL_SHIFT: &str = ">>>";
pub const OP_SHL_ASSIGN: &str = "<<=";
pub const OP_SHR_ASSIGN: &str = ">>=";

pub const OP_EQ: &str = "==";
pub const OP_NEQ: &str = "!=";
pub const OP_LE: &str = "<=";
pub const OP_GE: &str = ">=";
pub const OP_AND: &str = "&&";
pub const OP_OR: &str = "||";
pub const OP_INC: &str = "++";
pub const OP_DEC: &str = "--";
pub const OP_ADD_ASSIGN: &str = "+=";
pub const OP_SUB_ASSIGN: &str = "-=";
pub const OP_MUL_ASSIGN: &str = "*=";
pub const OP_DIV_ASSIGN: &str = "/=";
pub const OP_MOD_ASSIGN: &str = "%=";
pub const OP_BITAND_ASSIGN: &str = "&=";
pub const OP_BITXOR_ASSIGN: &str = "^=";
pub const OP_BITOR_ASSIGN: &str = "|=";
pub const OP_SHL: &str = "<<";
pub const OP_SHR: &str = ">>";

pub const OP_PLUS: &str = "+";
pub const OP_MINUS: &str = "-";
pub const OP_STAR: &str = "*";
pub const OP_SLASH: &str = "/";
pub const OP_PERCENT: &str = "%";
pub const OP_BITAND: &str = "&";
pub const OP_BITOR: &str = "|";
pub const OP_BITXOR: &str = "^";
pub const OP_BITNOT: &str = "~";
pub const OP_NOT: &str = "!";
pub const OP_ASSIGN: &str = "=";
pub const OP_LT: &str = "<";
pub const OP_GT: &str = ">";

pub const PUNC_LPAREN: &str = "(";
pub const PUNC_RPAREN: &str = ")";
pub const PUNC_LBRACKET: &str = "[";
pub const PUNC_RBRACKET: &str = "]";
pub const PUNC_LBRACE: &str = "{";
pub const PUNC_RBRACE: &str = "}";
pub const PUNC_COMMA: &str = ",";
pub const PUNC_SEMI: &str = ";";
pub const PUNC_COLON: &str = ":";
pub const PUNC_QUESTION: &str = "?";
pub const PUNC_DOT: &str = ".";

pub const ALL_OPERATORS: &[&str] = &[
    OP_ZERO_FILL_SHIFT_ASSIGN,
    OP_STRICT_EQ,
    OP_STRICT_NEQ,
    OP_ZERO_FILL_SHIFT,
    OP_SHL_ASSIGN,
    OP_SHR_ASSIGN,
    OP_EQ,
    OP_NEQ,
    OP_LE,
    OP_GE,
    OP_AND,
    OP_OR,
    OP_INC,
    OP_DEC,
    OP_ADD_ASSIGN,
    OP_SUB_ASSIGN,
    OP_MUL_ASSIGN,
    OP_DIV_ASSIGN,
    OP_MOD_ASSIGN,
    OP_BITAND_ASSIGN,
    OP_BITXOR_ASSIGN,
    OP_BITOR_ASSIGN,
    OP_SHL,
    OP_SHR,
    OP_PLUS,
    OP_MINUS,
    OP_STAR,
    OP_SLASH,
    OP_PERCENT,
    OP_BITAND,
    OP_BITOR,
    OP_BITXOR,
    OP_BITNOT,
    OP_NOT,
    OP_ASSIGN,
    OP_LT,
    OP_GT,
    PUNC_LPAREN,
    PUNC_RPAREN,
    PUNC_LBRACKET,
    PUNC_RBRACKET,
    PUNC_LBRACE,
    PUNC_RBRACE,
    PUNC_COMMA,
    PUNC_SEMI,
    PUNC_COLON,
    PUNC_QUESTION,
    PUNC_DOT,
];

/// Length in bytes of the longest entry in [`ALL_OPERATORS`]. Every operator is ASCII.
pub const MAX_OPERATOR_LEN: usize = 4;

/// Longest operator that prefixes `input`, trying candidate lengths from
/// [`MAX_OPERATOR_LEN`] down to 1.
pub fn longest_operator(input: &str) -> Option<&'static str> {
    (1..=MAX_OPERATOR_LEN)
        .rev()
        .filter_map(|len| input.get(..len))
        .find_map(|candidate| ALL_OPERATORS.iter().copied().find(|op| *op == candidate))
}
