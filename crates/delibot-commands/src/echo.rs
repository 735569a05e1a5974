//! Echo command that quotes the invoking message back.

use crate::convert::user_id;
use crate::framework::{Context, Error};
use delibot_common::{format_reply, Message, UserId, DEFAULT_REPLY_PREFIX};

/// Quotes your text back, noting whose message you replied to.
#[poise::command(prefix_command)]
pub async fn echo(ctx: Context<'_>) -> Result<(), Error> {
    let poise::Context::Prefix(prefix_ctx) = ctx else {
        return Ok(());
    };

    let msg = prefix_ctx.msg;
    let parent_author = msg
        .referenced_message
        .as_deref()
        .map(|referenced| user_id(referenced.author.id));

    ctx.say(echo_reply(prefix_ctx.args, user_id(msg.author.id), parent_author))
        .await?;
    Ok(())
}

/// Builds the echo text for `args` sent by `author`, optionally in reply to
/// a message from `parent_author`.
pub fn echo_reply(args: &str, author: UserId, parent_author: Option<UserId>) -> String {
    let content = args.trim();
    match parent_author {
        Some(parent_author) => {
            let parent = Message::new(String::new(), parent_author);
            format_reply(
                &Message::new(content, author).replying_to(&parent),
                DEFAULT_REPLY_PREFIX,
            )
        }
        None => format_reply(&Message::new(content, author), DEFAULT_REPLY_PREFIX),
    }
}
