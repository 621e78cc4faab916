use anyhow::{Context as _, Result};
use clap::Args;
use std::io::{self, Read};
use walink_core::{MethodCall, MethodResponse, UnsupportedOperation};

use crate::commands::{print_json, Context};

#[derive(Debug, Args)]
pub struct CallArgs {
    /// JSON method call, or `-` to read it from stdin
    pub call: String,
}

pub fn call(ctx: &Context<'_>, args: CallArgs) -> Result<()> {
    let raw = if args.call == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .with_context(|| "read method call from stdin")?;
        buf
    } else {
        args.call
    };

    let call: MethodCall =
        serde_json::from_str(raw.trim()).with_context(|| "parse method call")?;
    let response = ctx.dispatcher().handle_call(&call);
    print_json(&response)?;

    match response {
        MethodResponse::Success { .. } => Ok(()),
        MethodResponse::NotImplemented { method } => Err(UnsupportedOperation { method }.into()),
    }
}
