//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the softfloat16-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use clap::Parser;
use fp16::float::Float16;
use fp16::format::breakdown;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use sflib::safe_parse::parse_u32_auto;

/// fpconv - convert integers to and from the 16-bit software float format
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Treat the operand as a packed bit pattern and decode it.
    #[arg(short, long)]
    decode: bool,

    /// Value to convert; decimal, hexadecimal with 0x, or octal with a
    /// leading 0.
    value: String,
}

fn fpconv(args: &Args) -> Result<String, String> {
    let value = parse_u32_auto(&args.value)
        .map_err(|_| format!("{}: '{}'", gettext("invalid integer operand"), args.value))?;

    if args.decode {
        let bits = u16::try_from(value)
            .map_err(|_| format!("{}: '{}'", gettext("bit pattern wider than 16 bits"), args.value))?;
        return Ok(format!("{}\n", Float16::from_bits(bits)));
    }

    let encoded = Float16::encode(value).map_err(|e| e.to_string())?;
    Ok(format!("Input:    {}\n{}\n", value, breakdown(encoded)))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(sflib::PROJECT_NAME)?;
    bind_textdomain_codeset(sflib::PROJECT_NAME, "UTF-8")?;

    env_logger::init();

    let mut exit_code = 0;

    match fpconv(&args) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            exit_code = 1;
            eprintln!("fpconv: {}", e);
        }
    }

    std::process::exit(exit_code)
}
