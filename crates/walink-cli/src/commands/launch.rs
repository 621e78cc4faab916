use anyhow::Result;
use clap::Args;
use serde::Serialize;
use walink_core::{CoreError, LaunchRequest};

use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_launched};

#[derive(Debug, Args)]
pub struct ChatArgs {
    #[arg(long)]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub message: String,
}

#[derive(Debug, Serialize)]
struct LaunchOutcome {
    launched: bool,
}

fn request(phone: &str, message: &str) -> LaunchRequest {
    LaunchRequest::new(phone.trim(), message.trim())
}

pub fn launch(ctx: &Context<'_>, args: ChatArgs) -> Result<()> {
    let dispatcher = ctx.dispatcher();
    let launched = dispatcher.dispatch_request(&request(&args.phone, &args.message));

    if ctx.json {
        print_json(&LaunchOutcome { launched })?;
    } else if launched {
        println!("launched");
    }

    if launched {
        Ok(())
    } else {
        Err(not_launched())
    }
}

pub fn link(ctx: &Context<'_>, args: ChatArgs) -> Result<()> {
    let dispatcher = ctx.dispatcher();
    let plan = dispatcher
        .plan(&request(&args.phone, &args.message))
        .map_err(|err| match err {
            CoreError::EmptyPhone => {
                invalid_input("phone number is empty once formatting is removed")
            }
            other => other.into(),
        })?;

    if ctx.json {
        print_json(&plan)?;
    } else {
        println!("{}", plan.url);
    }
    Ok(())
}
