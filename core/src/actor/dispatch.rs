pub mod dispatcher;
mod mailbox;

pub use {self::dispatcher::*, self::mailbox::*};
