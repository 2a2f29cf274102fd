//! A `nom` parser for the QASM-like dialect of §6: register declarations,
//! gate definitions (with bodies over formal parameters), opaque gates, the
//! built-in `U`/`CX`, measurement, reset, barrier, generic gate calls, and
//! classically guarded `if`.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{alpha1, alphanumeric1, char, digit1, multispace1},
    combinator::{map, map_res, opt, recognize, value},
    multi::{many0, separated_list0},
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};

use crate::ast::*;
use crate::error::IrError;

fn comment(input: &str) -> IResult<&str, ()> {
    value((), pair(tag("//"), take_while(|c| c != '\n')))(input)
}

fn sp(input: &str) -> IResult<&str, ()> {
    value((), many0(alt((value((), multispace1), comment))))(input)
}

fn identifier(input: &str) -> IResult<&str, String> {
    map(
        recognize(pair(
            alt((alpha1, tag("_"))),
            many0(alt((alphanumeric1, tag("_")))),
        )),
        |s: &str| s.to_string(),
    )(input)
}

fn usize_literal(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

fn float_literal(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
            opt(pair(
                alt((char('e'), char('E'))),
                pair(opt(alt((char('+'), char('-')))), digit1),
            )),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

fn argument(input: &str) -> IResult<&str, Argument> {
    alt((
        map(
            pair(identifier, delimited(char('['), usize_literal, char(']'))),
            |(name, idx)| Argument::Indexed(name, idx),
        ),
        map(identifier, Argument::Id),
    ))(input)
}

fn arg_list(input: &str) -> IResult<&str, Vec<Argument>> {
    separated_list0(tuple((sp, char(','), sp)), argument)(input)
}

fn param_list(input: &str) -> IResult<&str, Vec<f64>> {
    separated_list0(tuple((sp, char(','), sp)), float_literal)(input)
}

fn ident_list(input: &str) -> IResult<&str, Vec<String>> {
    separated_list0(tuple((sp, char(','), sp)), identifier)(input)
}

fn version_decl(input: &str) -> IResult<&str, String> {
    delimited(
        tuple((tag("OPENQASM"), sp)),
        map(
            recognize(pair(digit1, pair(char('.'), digit1))),
            |s: &str| s.to_string(),
        ),
        tuple((sp, char(';'))),
    )(input)
}

fn qreg_decl(input: &str) -> IResult<&str, Statement> {
    map(
        tuple((
            tag("qreg"),
            sp,
            identifier,
            sp,
            delimited(char('['), usize_literal, char(']')),
            sp,
            char(';'),
        )),
        |(_, _, name, _, size, _, _)| Statement::QRegDecl { name, size },
    )(input)
}

fn creg_decl(input: &str) -> IResult<&str, Statement> {
    map(
        tuple((
            tag("creg"),
            sp,
            identifier,
            sp,
            delimited(char('['), usize_literal, char(']')),
            sp,
            char(';'),
        )),
        |(_, _, name, _, size, _, _)| Statement::CRegDecl { name, size },
    )(input)
}

fn u_stmt(input: &str) -> IResult<&str, Statement> {
    map(
        tuple((
            char('U'),
            sp,
            delimited(char('('), param_list, char(')')),
            sp,
            argument,
            sp,
            char(';'),
        )),
        |(_, _, params, _, arg, _, _)| {
            let mut p = [0.0; 3];
            for (i, v) in params.into_iter().take(3).enumerate() {
                p[i] = v;
            }
            Statement::U { params: p, arg }
        },
    )(input)
}

fn cx_stmt(input: &str) -> IResult<&str, Statement> {
    map(
        tuple((
            tag("CX"),
            sp,
            argument,
            sp,
            char(','),
            sp,
            argument,
            sp,
            char(';'),
        )),
        |(_, _, control, _, _, _, target, _, _)| Statement::CX { control, target },
    )(input)
}

fn gate_op(input: &str) -> IResult<&str, GateOp> {
    map(
        tuple((
            identifier,
            sp,
            opt(delimited(char('('), param_list, char(')'))),
            sp,
            ident_list,
            sp,
            char(';'),
        )),
        |(name, _, params, _, args, _, _)| GateOp {
            name,
            params: params.unwrap_or_default(),
            args,
        },
    )(input)
}

fn gate_decl(input: &str) -> IResult<&str, Statement> {
    map(
        tuple((
            tag("gate"),
            sp,
            identifier,
            sp,
            opt(delimited(char('('), ident_list, char(')'))),
            sp,
            ident_list,
            sp,
            char('{'),
            sp,
            many0(preceded(sp, gate_op)),
            sp,
            char('}'),
        )),
        |(_, _, name, _, params, _, formals, _, _, _, body, _, _)| Statement::GateDecl {
            name,
            params: params.unwrap_or_default(),
            formals,
            body,
        },
    )(input)
}

fn opaque_decl(input: &str) -> IResult<&str, Statement> {
    map(
        tuple((
            tag("opaque"),
            sp,
            identifier,
            sp,
            opt(delimited(char('('), ident_list, char(')'))),
            sp,
            ident_list,
            sp,
            char(';'),
        )),
        |(_, _, name, _, params, _, formals, _, _)| Statement::Opaque {
            name,
            params: params.unwrap_or_default(),
            formals,
        },
    )(input)
}

fn gate_call(input: &str) -> IResult<&str, Statement> {
    map(
        tuple((
            identifier,
            sp,
            opt(delimited(char('('), param_list, char(')'))),
            sp,
            arg_list,
            sp,
            char(';'),
        )),
        |(name, _, params, _, args, _, _)| Statement::GateCall {
            name,
            params: params.unwrap_or_default(),
            args,
        },
    )(input)
}

fn measure_stmt(input: &str) -> IResult<&str, Statement> {
    map(
        tuple((
            tag("measure"),
            sp,
            argument,
            sp,
            tag("->"),
            sp,
            argument,
            sp,
            char(';'),
        )),
        |(_, _, qubit, _, _, _, target, _, _)| Statement::Measure { qubit, target },
    )(input)
}

fn reset_stmt(input: &str) -> IResult<&str, Statement> {
    map(
        tuple((tag("reset"), sp, argument, sp, char(';'))),
        |(_, _, qubit, _, _)| Statement::Reset { qubit },
    )(input)
}

fn barrier_stmt(input: &str) -> IResult<&str, Statement> {
    map(
        tuple((tag("barrier"), sp, arg_list, sp, char(';'))),
        |(_, _, args, _, _)| Statement::Barrier { args },
    )(input)
}

fn if_stmt(input: &str) -> IResult<&str, Statement> {
    map(
        tuple((
            tag("if"),
            sp,
            char('('),
            sp,
            identifier,
            sp,
            tag("=="),
            sp,
            usize_literal,
            sp,
            char(')'),
            sp,
            statement,
        )),
        |(_, _, _, _, creg, _, _, _, value, _, _, _, body)| Statement::If {
            creg,
            value,
            body: Box::new(body),
        },
    )(input)
}

fn statement(input: &str) -> IResult<&str, Statement> {
    preceded(
        sp,
        alt((
            qreg_decl,
            creg_decl,
            gate_decl,
            opaque_decl,
            u_stmt,
            cx_stmt,
            measure_stmt,
            reset_stmt,
            barrier_stmt,
            if_stmt,
            gate_call,
        )),
    )(input)
}

pub fn parse_program(input: &str) -> crate::error::Result<Program> {
    let (input, version) =
        opt(preceded(sp, version_decl))(input).map_err(|e| IrError::Parse(e.to_string()))?;

    let (input, statements) =
        many0(statement)(input).map_err(|e| IrError::Parse(e.to_string()))?;

    let input = sp(input).map(|(i, _)| i).unwrap_or(input);
    if !input.is_empty() {
        return Err(IrError::Parse(format!("unparsed input: {input}")));
    }

    Ok(Program {
        version,
        statements,
    })
}
