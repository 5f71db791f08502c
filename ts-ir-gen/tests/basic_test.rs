use ts_ir_gen::{
    convert_declarations, Class, ClassTag, Conversion, Method, Options, Param, Type,
    TOO_MANY_CONSTRUCTORS,
};

fn convert(ts: &str) -> Conversion {
    convert_declarations(&Options::default().with_file_name("/basic.d.ts"), ts)
}

#[test]
fn interface_round_trip() {
    let c = convert("interface Foo { foo(x: number): string; }");

    assert!(c.warnings.is_empty());
    assert_eq!(
        c.classes,
        vec![Class {
            name: "Foo".to_string(),
            module_name: None,
            is_exported: false,
            methods: vec![Method {
                name: "foo".to_string(),
                params: vec![Param::new("x", Type::named("number"))],
                rest_param: None,
                return_type: Some(Type::named("string")),
            }],
            constructor: None,
            tag: ClassTag::Interface,
        }]
    );
}

#[test]
fn module_nested_two_levels() {
    let c = convert("declare module A.B { class C { } }");

    assert_eq!(c.classes.len(), 1);
    assert_eq!(c.classes[0].name, "C");
    assert_eq!(c.classes[0].module_name.as_deref(), Some("A.B"));
}

#[test]
fn two_constructors_warn_and_keep_first() {
    let c = convert(
        r#"
            export declare class Shape {
                constructor(sides: number);
                constructor(name: string, ...points: Point[]);
                area(): number;
            }
        "#,
    );

    assert_eq!(c.warnings, vec![TOO_MANY_CONSTRUCTORS]);
    let ctor = c.classes[0].constructor.as_ref().expect("a constructor");
    assert_eq!(ctor.params, vec![Param::new("sides", Type::named("number"))]);
    assert_eq!(ctor.rest_param, None);
}

#[test]
fn untyped_parameter_defaults_to_string() {
    let c = convert("declare class A { f(x): void; }");

    assert_eq!(
        c.classes[0].methods[0].params,
        vec![Param::new("x", Type::named("string"))]
    );
}

#[test]
fn malformed_input_yields_empty_result() {
    let (warnings, classes) = convert("export declare class {{{").into_parts();

    assert!(warnings.is_empty());
    assert!(classes.is_empty());
}

#[test]
fn realistic_declaration_file() {
    let c = convert(
        r#"
            import { EventEmitter } from 'events';

            export interface Options {
                verbose: boolean;
                resolve(path: string, ...extra: string[]): Promise<string>;
            }

            export declare function create(opts: Options): Client;

            declare namespace client {
                export class Client {
                    constructor(opts?: Options);
                    on(event: string, cb: (...args: any[]) => void): this;
                    send(body: { id: number }, retries?: number): Promise<void>;
                    close(): void;
                }

                namespace errors {
                    export interface Failure {
                        code(): number;
                    }
                }
            }
        "#,
    );

    assert!(c.warnings.is_empty());

    let rendered: Vec<String> = c.classes.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            concat!(
                "export interface Options {\n",
                "    resolve(path: string, ...extra: Array<string>): Promise<string>;\n",
                "}",
            ),
            concat!(
                "export declare class client.Client {\n",
                "    constructor(opts: Options): void;\n",
                "    on(event: string, cb: string): void;\n",
                "    send(body: object, retries: number): Promise;\n",
                "    close(): void;\n",
                "}",
            ),
            "export interface client.errors.Failure {\n    code(): number;\n}",
        ]
    );
}
