mod registry;

pub use registry::{CommentSyntax, Lang, LanguageRegistry, known_extensions};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
