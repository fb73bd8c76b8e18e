//! Generators for syntax-range diagnostics (TS1xxx).
//!
//! One pure function per code. Prose is literal; the occasional dynamic
//! token comes out of [`fields`] with a documented placeholder on a miss.

use tse_diagnostic::{fields, Explanation};

use crate::Generator;

/// Exact-code table for the syntax range. One entry per code; the
/// registry rejects duplicates at construction.
pub(crate) const GENERATORS: &[(u32, Generator)] = &[
    (1002, unterminated_string),
    (1003, identifier_expected),
    (1005, token_expected),
    (1006, unexpected_token_at_end),
    (1009, trailing_comma),
    (1014, rest_parameter_not_last),
    (1015, parameter_initializer_conflict),
    (1016, required_after_optional),
    (1029, unexpected_token),
    (1034, super_call_required),
    (1044, yield_outside_generator),
    (1066, await_outside_async),
    (1071, this_outside_class),
    (1105, for_await_of_misuse),
    (1109, expression_expected),
    (1123, async_generator),
    (1128, declaration_expected),
    (1141, template_string_expected),
    (1147, import_not_top_level),
    (1160, unterminated_template),
    (1163, exported_variable_uninitialized),
    (1164, duplicate_modifier),
    (1183, dynamic_import_argument),
];

fn unterminated_string(_message: &str) -> Explanation {
    Explanation::new("unterminated string literal")
        .with_description("a string literal is missing its closing quote")
        .with_fix(
            "close the string",
            "const greeting = \"hello\"; // closing quote on the same line",
        )
        .with_fix(
            "use a template literal for multi-line text",
            "const text = `line one\nline two`;",
        )
}

fn identifier_expected(_message: &str) -> Explanation {
    Explanation::new("identifier expected")
        .with_description(
            "the parser expected a name here; reserved words and stray \
             punctuation cannot be used as identifiers",
        )
        .with_fix(
            "use a valid name",
            "// reserved words cannot name variables\nlet value = 1;   // not: let class = 1;",
        )
}

fn token_expected(message: &str) -> Explanation {
    let token = fields::first_quoted_or(message, "token");
    Explanation::new(format!("'{token}' expected"))
        .with_description(format!(
            "the parser expected '{token}' at this position and found something else"
        ))
        .with_fix(
            "add the missing token",
            format!("const value = compute(){token} // insert the '{token}'"),
        )
        .with_fix(
            "check the surrounding brackets",
            "function example() {\n    if (condition) {\n        work();\n    } // every opener needs its closer\n}",
        )
}

fn unexpected_token_at_end(message: &str) -> Explanation {
    let token = fields::first_quoted_or(message, "token");
    Explanation::new("unexpected token at end of file")
        .with_description(format!(
            "'{token}' appears after the last complete declaration; \
             an unbalanced bracket earlier in the file is the usual cause"
        ))
        .with_fix(
            "balance the brackets",
            "function example() {\n    if (condition) {\n        // …\n    } // close the if\n}     // close the function",
        )
        .with_fix("remove the stray token", "const obj = {\n    prop: value,\n};")
}

fn trailing_comma(_message: &str) -> Explanation {
    Explanation::new("trailing comma not allowed")
        .with_description("a comma appears where no further element may follow")
        .with_fix(
            "remove the comma",
            "function greet(name: string) { /* … */ } // not: greet(name: string,)",
        )
}

fn rest_parameter_not_last(_message: &str) -> Explanation {
    Explanation::new("rest parameter must be last")
        .with_description("a rest parameter collects the remaining arguments, so nothing may follow it")
        .with_fix(
            "move the rest parameter to the end",
            "function join(separator: string, ...parts: string[]) {\n    return parts.join(separator);\n}",
        )
}

fn parameter_initializer_conflict(_message: &str) -> Explanation {
    Explanation::new("parameter cannot have question mark and initializer")
        .with_description(
            "a default value already makes a parameter optional; \
             combining `?` with `=` is redundant and rejected",
        )
        .with_fix("keep the initializer", "function page(size: number = 10) { /* … */ }")
        .with_fix("keep the question mark", "function page(size?: number) { /* … */ }")
}

fn required_after_optional(_message: &str) -> Explanation {
    Explanation::new("required parameter after optional parameter")
        .with_description("once a parameter is optional, every later parameter must be optional too")
        .with_fix(
            "reorder the parameters",
            "function send(to: string, subject?: string) { /* required first */ }",
        )
        .with_fix(
            "give the later parameter a default",
            "function send(to?: string, subject: string = \"(none)\") { /* … */ }",
        )
}

fn unexpected_token(message: &str) -> Explanation {
    let token = fields::first_quoted_or(message, "token");
    Explanation::new("unexpected token")
        .with_description(format!("'{token}' cannot appear at this position"))
        .with_fix(
            "fix the statement structure",
            "if (condition) {\n    work();\n} else {\n    rest();\n} // a single else per if",
        )
}

fn super_call_required(_message: &str) -> Explanation {
    Explanation::new("'super' call required")
        .with_description(
            "a derived class constructor must call super() before using \
             'this' or returning",
        )
        .with_fix(
            "call super first",
            "class Child extends Parent {\n    constructor(name: string) {\n        super(name);\n        this.ready = true;\n    }\n}",
        )
}

fn yield_outside_generator(_message: &str) -> Explanation {
    Explanation::new("'yield' outside a generator")
        .with_description("yield expressions are only valid inside function* bodies")
        .with_fix(
            "declare the function as a generator",
            "function* numbers() {\n    yield 1;\n    yield 2;\n}",
        )
        .with_fix(
            "return instead of yielding",
            "function single() {\n    return 1; // no generator needed for one value\n}",
        )
}

fn await_outside_async(_message: &str) -> Explanation {
    Explanation::new("'await' outside an async function")
        .with_description("await expressions are only valid inside functions marked async")
        .with_fix(
            "mark the function async",
            "async function load() {\n    const data = await fetchData();\n    return data;\n}",
        )
        .with_fix(
            "use promise chaining",
            "fetchData()\n    .then(data => render(data))\n    .catch(err => report(err));",
        )
}

fn this_outside_class(_message: &str) -> Explanation {
    Explanation::new("'this' outside a class or object")
        .with_description("a 'this' expression only has meaning inside a class body or object literal")
        .with_fix(
            "move the code into a class",
            "class Counter {\n    count = 0;\n    increment() {\n        this.count += 1;\n    }\n}",
        )
        .with_fix(
            "pass the value explicitly",
            "function increment(counter: Counter) {\n    counter.count += 1;\n}",
        )
}

fn for_await_of_misuse(_message: &str) -> Explanation {
    Explanation::new("for await…of on a non-async iterable")
        .with_description("for await…of only iterates AsyncIterable values, inside async functions")
        .with_fix(
            "iterate an async iterable",
            "async function consume() {\n    for await (const chunk of stream) {\n        process(chunk);\n    }\n}",
        )
        .with_fix(
            "use a plain for…of for sync iterables",
            "for (const item of items) {\n    process(item);\n}",
        )
}

fn expression_expected(_message: &str) -> Explanation {
    Explanation::new("expression expected")
        .with_description(
            "the parser needed an expression here; a dangling operator or \
             empty parenthesis is the usual cause",
        )
        .with_fix(
            "complete the expression",
            "const total = price * quantity; // both operands present",
        )
}

fn async_generator(_message: &str) -> Explanation {
    Explanation::new("generator cannot be 'async'")
        .with_description("a function cannot combine the async modifier with generator syntax here")
        .with_fix(
            "use a plain generator",
            "function* numbers() {\n    yield 1;\n    yield 2;\n}",
        )
        .with_fix(
            "use an async function",
            "async function load() {\n    return await fetchData();\n}",
        )
}

fn declaration_expected(_message: &str) -> Explanation {
    Explanation::new("declaration or statement expected")
        .with_description(
            "the parser found something that is neither a declaration nor \
             a statement, typically an extra closing brace",
        )
        .with_fix(
            "remove the extra brace",
            "function example() {\n    work();\n} // exactly one closer per opener",
        )
}

fn template_string_expected(_message: &str) -> Explanation {
    Explanation::new("template literal expected")
        .with_description(
            "interpolation with ${…} only works inside backtick-quoted \
             template literals, not ordinary strings",
        )
        .with_fix(
            "use backticks",
            "const greeting = `Hello, ${name}`; // '…' and \"…\" do not interpolate",
        )
        .with_fix(
            "multi-line templates",
            "const message = `\n    name: ${name}\n    age: ${age}\n`;",
        )
}

fn import_not_top_level(_message: &str) -> Explanation {
    Explanation::new("import declaration not at top level")
        .with_description("static import declarations must appear at the top level of a module")
        .with_fix(
            "move the import to the top",
            "import { helper } from './helper';\n\nfunction useHelper() {\n    return helper();\n}",
        )
        .with_fix(
            "use a dynamic import inside functions",
            "async function lazy() {\n    const mod = await import('./helper');\n    return mod.helper();\n}",
        )
}

fn unterminated_template(_message: &str) -> Explanation {
    Explanation::new("unterminated template literal")
        .with_description("a template literal is missing its closing backtick")
        .with_fix(
            "close the template",
            "const text = `spans\nmultiple lines`; // closing backtick required",
        )
}

fn exported_variable_uninitialized(_message: &str) -> Explanation {
    Explanation::new("exported variable needs an initializer")
        .with_description("a variable exported from a module must be initialized where it is declared")
        .with_fix(
            "initialize at the declaration",
            "export const limit = 42;\nexport let counter = 0;",
        )
        .with_fix(
            "declare first, export after",
            "let limit = 42;\nexport { limit };",
        )
}

fn duplicate_modifier(message: &str) -> Explanation {
    let modifier = fields::first_quoted_or(message, "modifier");
    Explanation::new(format!("duplicate '{modifier}' modifier"))
        .with_description(format!("the '{modifier}' modifier may appear at most once per declaration"))
        .with_fix(
            "remove the repeated modifier",
            "class Example {\n    private readonly value: number = 0; // each modifier once\n}",
        )
}

fn dynamic_import_argument(_message: &str) -> Explanation {
    Explanation::new("dynamic import needs exactly one argument")
        .with_description("a dynamic import() call takes a single module-specifier argument")
        .with_fix(
            "pass one specifier",
            "const mod = await import('./module');\n\n// a computed specifier is fine too\nconst name = flag ? 'a' : 'b';\nconst chosen = await import(`./${name}`);",
        )
}
