//! Generators for type-range diagnostics (TS2xxx).
//!
//! The extraction labels mirror the compiler's actual wording, e.g.
//! `Argument of type 'A' is not assignable to parameter of type 'B'.`
//! When the wording drifts and a field goes missing, the generator falls
//! back to its placeholder and the explanation stays generic but valid.

use tse_diagnostic::{fields, Explanation};

use crate::Generator;

/// Exact-code table for the type range.
pub(crate) const GENERATORS: &[(u32, Generator)] = &[
    (2300, duplicate_identifier),
    (2304, cannot_find_name),
    (2314, generic_type_arguments),
    (2322, type_not_assignable),
    (2339, property_not_exist),
    (2345, argument_type_mismatch),
    (2349, not_callable),
    (2352, suspicious_conversion),
    (2355, function_must_return),
    (2366, function_lacks_return),
    (2367, incomparable_types),
    (2391, implementation_missing),
    (2448, used_before_declaration),
    (2451, block_scoped_redeclaration),
    (2454, used_before_assignment),
    (2532, possibly_undefined),
    (2540, readonly_assignment),
    (2551, property_suggestion),
    (2554, argument_count_mismatch),
    (2571, unknown_type_object),
    (2578, unused_type_parameter),
    (2589, infinite_type_recursion),
    (2693, excessive_type_depth),
    (2741, missing_property),
];

fn duplicate_identifier(message: &str) -> Explanation {
    let name = fields::first_quoted_or(message, "unknown");
    Explanation::new(format!("duplicate identifier '{name}'"))
        .with_description(format!(
            "'{name}' is declared more than once in the same scope; every \
             identifier must be unique within its scope"
        ))
        .with_fix("rename one declaration", format!("let {name}Backup = …; // distinct names"))
        .with_fix(
            "merge into a single declaration",
            format!("let {name} = initial;\n{name} = updated; // reassign instead of redeclaring"),
        )
}

fn cannot_find_name(message: &str) -> Explanation {
    let name = fields::quoted_after_or(message, "Cannot find name ", "unknown");
    Explanation::new(format!("cannot find name '{name}'"))
        .with_description(format!(
            "no variable, function, or type named '{name}' is in scope here"
        ))
        .with_fix(
            "declare it before use",
            format!("let {name}: unknown; // replace 'unknown' with the real type"),
        )
        .with_fix("import it", format!("import {{ {name} }} from './module';"))
        .with_fix(
            "check the spelling",
            format!("// a nearby declaration with a similar name may be the one you meant\n{name}",),
        )
}

fn generic_type_arguments(message: &str) -> Explanation {
    let name = fields::quoted_after_or(message, "Generic type ", "Type");
    Explanation::new(format!("generic type '{name}' requires type arguments"))
        .with_description(format!(
            "'{name}' is generic; its type parameters must be supplied or inferable"
        ))
        .with_fix(
            "supply the type arguments",
            "interface Container<T> {\n    value: T;\n}\nconst box: Container<string> = { value: \"hello\" };",
        )
        .with_fix(
            "let inference fill them in",
            "function wrap<T>(value: T): Container<T> {\n    return { value };\n}\nconst box = wrap(\"hello\"); // T inferred as string",
        )
}

fn type_not_assignable(message: &str) -> Explanation {
    let source = fields::quoted_after_or(message, "Type ", "the source type");
    let target = fields::quoted_after_or(message, "type ", "the target type");
    Explanation::new(format!("type '{source}' is not assignable to '{target}'"))
        .with_description(format!(
            "a value of type '{source}' cannot be used where '{target}' is expected"
        ))
        .with_fix(
            "use a value of the expected type",
            format!("let value: {target} = …; // assign a {target}, not a {source}"),
        )
        .with_fix(
            "widen the declared type",
            format!("interface Example {{\n    value: {source} | {target}; // union admits both\n}}"),
        )
}

fn property_not_exist(message: &str) -> Explanation {
    let property = fields::quoted_after_or(message, "Property ", "property");
    let type_name = fields::quoted_after_or(message, "type ", "the type");
    Explanation::new(format!("property '{property}' does not exist on '{type_name}'"))
        .with_description(format!(
            "'{type_name}' declares no property named '{property}'"
        ))
        .with_fix(
            "add the property to the type",
            format!("interface {type_name} {{\n    {property}: unknown; // give it the real type\n}}"),
        )
        .with_fix(
            "guard the access",
            format!("const value = obj?.{property}; // undefined when absent"),
        )
}

fn argument_type_mismatch(message: &str) -> Explanation {
    let argument = fields::quoted_after_or(message, "Argument of type ", "the argument type");
    let parameter = fields::quoted_after_or(message, "parameter of type ", "the parameter type");
    Explanation::new(format!(
        "argument of type '{argument}' not assignable to parameter of type '{parameter}'"
    ))
    .with_description(format!(
        "the call passes a '{argument}' where the function declares a '{parameter}' parameter"
    ))
    .with_fix(
        "convert the argument",
        format!("const converted: {parameter} = convert(original);\ncallee(converted);"),
    )
    .with_fix(
        "widen the parameter",
        format!("function callee(param: {argument} | {parameter}) {{ /* … */ }}"),
    )
}

fn not_callable(message: &str) -> Explanation {
    let type_name = fields::quoted_after_or(message, "Type ", "this expression's type");
    Explanation::new("expression is not callable")
        .with_description(format!("'{type_name}' has no call signature, so it cannot be invoked"))
        .with_fix(
            "call a function-typed value",
            "const handler: () => void = () => work();\nhandler();",
        )
        .with_fix(
            "narrow before calling",
            "if (typeof value === 'function') {\n    value();\n}",
        )
}

fn suspicious_conversion(message: &str) -> Explanation {
    let source = fields::quoted_after_or(message, "type ", "the source type");
    let target = fields::quoted_after_last_or(message, "type ", "the target type");
    Explanation::new("conversion may be a mistake")
        .with_description(format!(
            "'{source}' and '{target}' do not overlap enough for a direct \
             assertion; the conversion is likely unintended"
        ))
        .with_fix(
            "assert through unknown when intentional",
            format!("const value = original as unknown as {target};"),
        )
        .with_fix(
            "write an explicit conversion",
            format!("function to{target}(value: {source}): {target} {{\n    // real conversion logic\n}}"),
        )
}

fn function_must_return(_message: &str) -> Explanation {
    Explanation::new("function must return a value")
        .with_description("a function whose declared return type is not 'void' has to return something")
        .with_fix(
            "return a value",
            "function compute(): number {\n    return 42;\n}",
        )
        .with_fix(
            "declare void when nothing is returned",
            "function log(message: string): void {\n    console.log(message);\n}",
        )
}

fn function_lacks_return(_message: &str) -> Explanation {
    Explanation::new("function lacks an ending return statement")
        .with_description(
            "some paths through this function reach the end without \
             returning, but the return type excludes 'undefined'",
        )
        .with_fix(
            "return on every path",
            "function pick(flag: boolean): number {\n    if (flag) {\n        return 1;\n    }\n    return 0; // the fall-through path returns too\n}",
        )
}

fn incomparable_types(message: &str) -> Explanation {
    let left = fields::quoted_after_or(message, "types ", "the left type");
    let right = fields::quoted_after_or(message, "and ", "the right type");
    Explanation::new("comparison appears unintentional")
        .with_description(format!(
            "'{left}' and '{right}' have no overlap, so the comparison is \
             always false"
        ))
        .with_fix(
            "narrow with a type guard",
            format!("if (typeof value === '{left}') {{\n    // handle {left}\n}} else if (typeof value === '{right}') {{\n    // handle {right}\n}}"),
        )
        .with_fix(
            "convert one side first",
            "if (String(code) === expected) {\n    // compare like with like\n}",
        )
}

fn implementation_missing(_message: &str) -> Explanation {
    Explanation::new("function implementation missing")
        .with_description(
            "a function declaration has a signature but no body; overload \
             signatures need one implementation directly after them",
        )
        .with_fix(
            "add the implementation",
            "function parse(input: string): number;\nfunction parse(input: number): number;\nfunction parse(input: string | number): number {\n    return typeof input === 'string' ? Number(input) : input;\n}",
        )
}

fn used_before_declaration(message: &str) -> Explanation {
    let name = fields::quoted_after_or(message, "variable ", "variable");
    Explanation::new(format!("'{name}' used before its declaration"))
        .with_description(format!(
            "block-scoped bindings are unreachable before their declaration; \
             '{name}' is read inside that dead zone"
        ))
        .with_fix(
            "declare before use",
            format!("let {name} = initial;\nuse({name}); // declaration first"),
        )
}

fn block_scoped_redeclaration(message: &str) -> Explanation {
    let name = fields::quoted_after_or(message, "variable ", "variable");
    Explanation::new(format!("cannot redeclare '{name}'"))
        .with_description(format!(
            "'{name}' is a let/const binding and may only be declared once per block"
        ))
        .with_fix(
            "reassign instead of redeclaring",
            format!("let {name} = first;\n{name} = second; // no second 'let'"),
        )
        .with_fix(
            "scope the second declaration",
            format!("{{\n    let {name} = inner; // its own block\n}}"),
        )
}

fn used_before_assignment(message: &str) -> Explanation {
    let name = fields::quoted_after_or(message, "Variable ", "variable");
    Explanation::new(format!("'{name}' used before being assigned"))
        .with_description(format!(
            "'{name}' is declared without an initializer and read before \
             any assignment is certain to have happened"
        ))
        .with_fix(
            "initialize at the declaration",
            format!("let {name}: string = \"\"; // definite initial value"),
        )
        .with_fix(
            "assign on every path first",
            format!("let {name}: string;\nif (flag) {{\n    {name} = \"a\";\n}} else {{\n    {name} = \"b\";\n}}\nuse({name});"),
        )
}

fn possibly_undefined(message: &str) -> Explanation {
    let value = fields::quoted_after_or(message, "Object is possibly ", "undefined");
    Explanation::new(format!("object is possibly '{value}'"))
        .with_description(format!(
            "the object may be '{value}' at this point, so the access is unsafe"
        ))
        .with_fix("optional chaining", "const value = obj?.field ?? fallback;")
        .with_fix(
            "narrow with a check",
            "if (obj !== undefined && obj !== null) {\n    use(obj.field);\n}",
        )
        .with_fix(
            "a reusable guard",
            "function isDefined<T>(v: T | undefined | null): v is T {\n    return v !== undefined && v !== null;\n}\nif (isDefined(obj)) {\n    use(obj.field);\n}",
        )
}

fn readonly_assignment(message: &str) -> Explanation {
    let property = fields::first_quoted_or(message, "property");
    Explanation::new(format!("cannot assign to read-only '{property}'"))
        .with_description(format!(
            "'{property}' is declared readonly and cannot be written after initialization"
        ))
        .with_fix(
            "build a new object instead",
            format!("const updated = {{ ...original, {property}: newValue }};"),
        )
        .with_fix(
            "assign in the constructor",
            format!("class Example {{\n    readonly {property}: string;\n    constructor(value: string) {{\n        this.{property} = value; // allowed here only\n    }}\n}}"),
        )
}

fn property_suggestion(message: &str) -> Explanation {
    let property = fields::quoted_after_or(message, "Property ", "property");
    let suggestion = fields::quoted_after(message, "Did you mean ");
    let description = match suggestion {
        Some(suggested) => format!(
            "'{property}' does not exist on this type; the compiler found \
             a near-miss named '{suggested}'"
        ),
        None => format!("'{property}' does not exist on this type"),
    };
    Explanation::new(format!("property '{property}' does not exist"))
        .with_description(description)
        .with_fix(
            "use the suggested name",
            format!("obj.{}", suggestion.unwrap_or("correctName")),
        )
        .with_fix(
            "add the property",
            format!("interface Extended {{\n    {property}: string;\n}}"),
        )
}

fn argument_count_mismatch(message: &str) -> Explanation {
    let expected = fields::number_after(message, "Expected ");
    let got = fields::number_after(message, "but got ");
    let description = match (expected, got) {
        (Some(expected), Some(got)) => {
            format!("the function takes {expected} argument(s) but the call passes {got}")
        }
        _ => "the call's argument count does not match the function's parameter list".to_string(),
    };
    Explanation::new("wrong number of arguments")
        .with_description(description)
        .with_fix(
            "pass every required argument",
            "function connect(host: string, port: number) { /* … */ }\nconnect(\"localhost\", 8080);",
        )
        .with_fix(
            "make trailing parameters optional",
            "function connect(host: string, port: number = 80) { /* … */ }\nconnect(\"localhost\");",
        )
}

fn unknown_type_object(_message: &str) -> Explanation {
    Explanation::new("object is of type 'unknown'")
        .with_description("values of type 'unknown' must be narrowed before any member access")
        .with_fix(
            "narrow with typeof",
            "if (typeof value === 'string') {\n    console.log(value.length);\n}",
        )
        .with_fix(
            "narrow with instanceof",
            "if (value instanceof Error) {\n    console.log(value.message);\n}",
        )
}

fn unused_type_parameter(message: &str) -> Explanation {
    let parameter = fields::quoted_after_or(message, "Type parameter ", "T");
    Explanation::new(format!("unused type parameter '{parameter}'"))
        .with_description(format!(
            "'{parameter}' is declared but never referenced by the signature or body"
        ))
        .with_fix(
            "use the parameter",
            format!("function first<{parameter}>(items: {parameter}[]): {parameter} | undefined {{\n    return items[0];\n}}"),
        )
        .with_fix(
            "or remove it",
            "function count(items: unknown[]): number {\n    return items.length;\n}",
        )
}

fn infinite_type_recursion(_message: &str) -> Explanation {
    Explanation::new("infinitely nested type detected")
        .with_description("the type references itself without limit, so it can never be resolved")
        .with_fix(
            "bound the recursion depth",
            "type Safe<T, Depth extends number = 5> = Depth extends 0\n    ? never\n    : { value: T; next: Safe<T, [-1, 0, 1, 2, 3, 4][Depth]> };",
        )
        .with_fix(
            "use an interface",
            "interface Node<T> {\n    value: T;\n    next?: Node<T>; // interfaces may reference themselves\n}",
        )
}

fn excessive_type_depth(_message: &str) -> Explanation {
    Explanation::new("type instantiation is excessively deep")
        .with_description("expanding this type exceeds the compiler's nesting limit")
        .with_fix(
            "bound the recursive type",
            "type Limited<T, D extends number = 5> = D extends 0\n    ? T\n    : { value: T; next?: Limited<T, [-1, 0, 1, 2, 3, 4][D]> };",
        )
        .with_fix(
            "flatten the structure",
            "interface Node<T> {\n    value: T;\n    children?: Node<T>[]; // shallow, self-referential shape\n}",
        )
}

fn missing_property(message: &str) -> Explanation {
    let property = fields::first_quoted_or(message, "property");
    let source = fields::quoted_after_or(message, "type ", "the source type");
    let target = fields::quoted_after_last_or(message, "type ", "the required type");
    Explanation::new(format!("property '{property}' is missing in '{source}'"))
        .with_description(format!(
            "'{source}' lacks the property '{property}' that '{target}' requires"
        ))
        .with_fix(
            "add the missing property",
            format!("const value: {target} = {{\n    {property}: …, // supply it\n    // existing fields\n}};"),
        )
        .with_fix(
            "make the property optional",
            format!("interface {target} {{\n    {property}?: string; // optional when genuinely absent sometimes\n}}"),
        )
}
