//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the softfloat16-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use clap::Parser;
use fp16::float::{Float16, BITS};
use fp16::format::binary_string;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use sflib::safe_parse::parse_u32_auto;

/// fpmul - multiply two integers in the 16-bit software float format
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Also print the operand and product bit patterns.
    #[arg(short, long)]
    verbose: bool,

    /// Left factor; decimal, hexadecimal with 0x, or octal with a leading 0.
    multiplicand: String,

    /// Right factor, same domain as the left one.
    multiplier: String,
}

fn parse_operand(s: &str) -> Result<u32, String> {
    parse_u32_auto(s).map_err(|_| format!("{}: '{}'", gettext("invalid integer operand"), s))
}

fn fpmul(args: &Args) -> Result<String, String> {
    let a = parse_operand(&args.multiplicand)?;
    let b = parse_operand(&args.multiplier)?;

    let fa = Float16::encode(a).map_err(|e| e.to_string())?;
    let fb = Float16::encode(b).map_err(|e| e.to_string())?;
    let product = fa.multiply(fb).map_err(|e| e.to_string())?;

    let mut out = String::new();
    if args.verbose {
        out.push_str(&format!(
            "{} * {} == {}\n",
            binary_string(fa.to_bits().into(), BITS as usize),
            binary_string(fb.to_bits().into(), BITS as usize),
            binary_string(product.to_bits().into(), BITS as usize)
        ));
    }
    out.push_str(&format!("{} * {} == {}\n", a, b, product));

    Ok(out)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(sflib::PROJECT_NAME)?;
    bind_textdomain_codeset(sflib::PROJECT_NAME, "UTF-8")?;

    env_logger::init();

    let mut exit_code = 0;

    match fpmul(&args) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            exit_code = 1;
            eprintln!("fpmul: {}", e);
        }
    }

    std::process::exit(exit_code)
}
