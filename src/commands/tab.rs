// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::commands::print_screen;
use crate::config::Config;
use crate::session::{Intent, Session, Tab};

pub fn handle(session: &mut Session, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let tab: Tab = sub.get_one::<String>("name").unwrap().parse()?;
    session.dispatch(Intent::ChangeTab(tab))?;
    print_screen(session, cfg, None);
    Ok(())
}
