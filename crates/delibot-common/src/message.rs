//! Chat message model and reply formatting.

use crate::types::UserId;

/// Prefix placed in front of a formatted reply when the caller has no preference.
pub const DEFAULT_REPLY_PREFIX: &str = "> ";

/// A chat message as seen by the bot.
///
/// `reply_to` borrows the parent message; the parent is owned by whoever
/// built the chain, usually the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message<'a> {
    /// Text content, possibly empty.
    pub content: String,
    /// Author of the message.
    pub author_id: UserId,
    /// Message this one replies to, if any.
    pub reply_to: Option<&'a Message<'a>>,
}

impl<'a> Message<'a> {
    /// Creates a message that does not reply to anything.
    pub fn new(content: impl Into<String>, author_id: UserId) -> Self {
        Self {
            content: content.into(),
            author_id,
            reply_to: None,
        }
    }

    /// Marks this message as a reply to `parent`.
    #[must_use]
    pub fn replying_to(mut self, parent: &'a Message<'a>) -> Self {
        self.reply_to = Some(parent);
        self
    }
}

/// Renders `message` for display.
///
/// The first line is `prefix` followed by the content. When the message
/// replies to another one, a second line names the parent's author. Only the
/// immediate parent is read, so reply cycles are never walked.
pub fn format_reply(message: &Message<'_>, prefix: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + message.content.len());
    out.push_str(prefix);
    out.push_str(&message.content);

    if let Some(parent) = message.reply_to {
        out.push_str(&format!("\n(in reply to {})", parent.author_id));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_message() {
        let msg = Message::new("hi", UserId(1));
        assert_eq!(format_reply(&msg, DEFAULT_REPLY_PREFIX), "> hi");
    }

    #[test]
    fn test_reply_names_parent_author() {
        let parent = Message::new("x", UserId(42));
        let msg = Message::new("hi", UserId(1)).replying_to(&parent);
        assert_eq!(
            format_reply(&msg, DEFAULT_REPLY_PREFIX),
            "> hi\n(in reply to 42)"
        );
    }

    #[test]
    fn test_empty_content_yields_prefix_only() {
        let msg = Message::new("", UserId(7));
        assert_eq!(format_reply(&msg, DEFAULT_REPLY_PREFIX), "> ");
        assert_eq!(format_reply(&msg, ""), "");
    }

    #[test]
    fn test_only_immediate_parent_is_shown() {
        let root = Message::new("root", UserId(3));
        let middle = Message::new("middle", UserId(2)).replying_to(&root);
        let leaf = Message::new("leaf", UserId(1)).replying_to(&middle);

        assert_eq!(
            format_reply(&leaf, DEFAULT_REPLY_PREFIX),
            "> leaf\n(in reply to 2)"
        );
    }

    proptest! {
        #[test]
        fn test_no_reply_is_prefix_plus_content(
            prefix in ".{0,8}",
            content in ".{0,64}",
            author in any::<u64>(),
        ) {
            let msg = Message::new(content.clone(), UserId(author));
            prop_assert_eq!(format_reply(&msg, &prefix), format!("{prefix}{content}"));
        }

        #[test]
        fn test_reply_appends_parent_line(
            prefix in ".{0,8}",
            content in ".{0,64}",
            parent_author in any::<u64>(),
        ) {
            let parent = Message::new("parent", UserId(parent_author));
            let msg = Message::new(content.clone(), UserId(0)).replying_to(&parent);
            prop_assert_eq!(
                format_reply(&msg, &prefix),
                format!("{prefix}{content}\n(in reply to {parent_author})")
            );
        }
    }
}
