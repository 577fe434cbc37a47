//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the softfloat16-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use sflib::{run_test, TestPlan};

fn run_ok(cmd: &str, args: &[&str], expected_output: &str) {
    let str_args: Vec<String> = args.iter().map(|s| String::from(*s)).collect();

    run_test(TestPlan {
        cmd: String::from(cmd),
        args: str_args,
        stdin_data: String::new(),
        expected_out: String::from(expected_output),
        expected_err: String::from(""),
        expected_exit_code: 0,
    });
}

fn run_fail(cmd: &str, args: &[&str], expected_err: &str) {
    let str_args: Vec<String> = args.iter().map(|s| String::from(*s)).collect();

    run_test(TestPlan {
        cmd: String::from(cmd),
        args: str_args,
        stdin_data: String::new(),
        expected_out: String::from(""),
        expected_err: String::from(expected_err),
        expected_exit_code: 1,
    });
}

#[test]
fn test_fpmul_exact_products() {
    run_ok("fpmul", &["10", "2"], "10 * 2 == 20\n");
    run_ok("fpmul", &["5", "7"], "5 * 7 == 35\n");
    run_ok("fpmul", &["25", "10"], "25 * 10 == 250\n");
}

#[test]
fn test_fpmul_zero_operand() {
    run_ok("fpmul", &["0", "9"], "0 * 9 == 0\n");
    run_ok("fpmul", &["9", "0"], "9 * 0 == 0\n");
}

#[test]
fn test_fpmul_radix_prefixes() {
    run_ok("fpmul", &["0x10", "2"], "16 * 2 == 32\n");
    run_ok("fpmul", &["010", "2"], "8 * 2 == 16\n");
}

#[test]
fn test_fpmul_verbose_patterns() {
    run_ok(
        "fpmul",
        &["-v", "8", "4"],
        "0b0100100000000000 * 0b0100010000000000 == 0b0101000000000000\n\
         8 * 4 == 32\n",
    );
}

#[test]
fn test_fpmul_invalid_operand() {
    run_fail("fpmul", &["abc", "2"], "fpmul: invalid integer operand: 'abc'\n");
}

#[test]
fn test_fpmul_operand_too_large() {
    run_fail(
        "fpmul",
        &["70000", "2"],
        "fpmul: 70000 is too large for the 16-bit float format\n",
    );
}

#[test]
fn test_fpmul_product_overflow() {
    run_fail(
        "fpmul",
        &["2000", "2000"],
        "fpmul: exponent 36 is outside the representable range\n",
    );
}

#[test]
fn test_fpconv_encode_breakdown() {
    run_ok(
        "fpconv",
        &["8"],
        "Input:    8\n\
         Exponent: 18 (- 15)\n\
         Mantissa: 0b0000000000\n\
         Packed:   0b0100100000000000\n\
         Decoded:  8\n",
    );
}

#[test]
fn test_fpconv_encode_zero() {
    run_ok(
        "fpconv",
        &["0"],
        "Input:    0\n\
         Exponent: 0 (- 15)\n\
         Mantissa: 0b0000000000\n\
         Packed:   0b0000000000000000\n\
         Decoded:  0\n",
    );
}

#[test]
fn test_fpconv_encode_truncates() {
    run_ok(
        "fpconv",
        &["2049"],
        "Input:    2049\n\
         Exponent: 26 (- 15)\n\
         Mantissa: 0b0000000000\n\
         Packed:   0b0110100000000000\n\
         Decoded:  2048\n",
    );
}

#[test]
fn test_fpconv_decode() {
    run_ok("fpconv", &["-d", "0x4800"], "8\n");
    run_ok("fpconv", &["-d", "0x3E00"], "1.5\n");
    run_ok("fpconv", &["-d", "0"], "0\n");
}

#[test]
fn test_fpconv_decode_pattern_too_wide() {
    run_fail(
        "fpconv",
        &["-d", "70000"],
        "fpconv: bit pattern wider than 16 bits: '70000'\n",
    );
}

#[test]
fn test_fpconv_encode_too_large() {
    run_fail(
        "fpconv",
        &["70000"],
        "fpconv: 70000 is too large for the 16-bit float format\n",
    );
}
