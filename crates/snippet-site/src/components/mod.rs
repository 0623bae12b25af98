mod code_block;
mod copy_button;

pub use code_block::CodeBlock;
pub use copy_button::CopyButton;
