//! Type declarations and their members.

use tsdom_codegen::{
    CodeBuilder, EmitError, NULLABLE_MARKER, RenderOptions, Result, TypeMapper, split_nullable,
};
use tsdom_ir::{Member, Method, TypeDeclaration, TypeReference};

use super::Emitter;

impl<M: TypeMapper> Emitter<M> {
    /// Render a complete type declaration.
    ///
    /// The output starts at `opts.indent` and ends with a newline after the
    /// closing brace.
    #[tracing::instrument(skip_all, fields(name = %decl.name, kind = decl.kind.keyword()))]
    pub fn render_type_declaration(
        &self,
        decl: &TypeDeclaration,
        opts: &RenderOptions,
    ) -> Result<String> {
        let mut out = opts.indent_str();
        if decl.visibility.is_public() {
            out.push_str("export ");
        }
        out.push_str(decl.kind.keyword());
        out.push(' ');
        out.push_str(&decl.name);
        out.push_str(&self.render_generic_parameter_clause(decl));
        out.push_str(&self.render_base_type_clause(decl));
        out.push_str(" {");
        out.push_str(&self.render_members(decl, opts)?);
        Ok(out)
    }

    /// Render `<T extends C, U>`, or nothing when there are no type parameters.
    ///
    /// Only the first constraint of each parameter is used.
    pub fn render_generic_parameter_clause(&self, decl: &TypeDeclaration) -> String {
        if decl.is_enum() || decl.type_parameters.is_empty() {
            return String::new();
        }

        let params: Vec<String> = decl
            .type_parameters
            .iter()
            .map(|param| match param.constraints.first() {
                Some(constraint) => {
                    format!("{} extends {}", param.name, self.mapper.render_type(constraint))
                }
                None => param.name.clone(),
            })
            .collect();

        format!("<{}>", params.join(", "))
    }

    /// Render ` extends A,B` from the base types the mapper accepts.
    pub fn render_base_type_clause(&self, decl: &TypeDeclaration) -> String {
        if decl.is_enum() {
            return String::new();
        }

        let bases: Vec<String> = decl
            .base_types
            .iter()
            .filter(|ty| self.mapper.is_valid_for_derivation(ty))
            .map(|ty| self.mapper.render_type(ty))
            .collect();

        if bases.is_empty() {
            String::new()
        } else {
            format!(" extends {}", bases.join(","))
        }
    }

    /// Render everything after the opening brace, including the closing brace.
    pub fn render_members(&self, decl: &TypeDeclaration, opts: &RenderOptions) -> Result<String> {
        if decl.is_enum() {
            return self.render_enum_members(decl);
        }

        let inner = opts.nested();
        let mut out = String::from("\n");
        for member in &decl.members {
            match member {
                Member::Field { name, ty, .. } | Member::Property { name, ty } => {
                    out.push_str(&inner.indent_str());
                    out.push_str(&self.render_name_and_type(name, ty));
                    out.push_str(";\n");
                }
                Member::Method(method) => {
                    out.push_str(&self.render_method(method, &inner)?);
                }
                Member::Snippet { text } => {
                    out.push_str(&inner.indent_str());
                    out.push_str(text);
                    out.push('\n');
                }
            }
        }
        out.push_str(&opts.indent_str());
        out.push_str("}\n");
        Ok(out)
    }

    fn render_enum_members(&self, decl: &TypeDeclaration) -> Result<String> {
        let mut items = Vec::with_capacity(decl.members.len());
        for member in &decl.members {
            let Member::Field { name, init, .. } = member else {
                return Err(EmitError::InvalidEnumMember {
                    enum_name: decl.name.clone(),
                    member: describe_member(member),
                });
            };
            match init {
                None => items.push(name.clone()),
                Some(expr) => {
                    let literal =
                        expr.as_literal()
                            .ok_or_else(|| EmitError::NonConstantEnumInitializer {
                                enum_name: decl.name.clone(),
                                member: name.clone(),
                            })?;
                    items.push(format!("{}={}", name, literal));
                }
            }
        }
        Ok(format!("{}}}\n", items.join(", ")))
    }

    /// `name: Type`, moving a nullable marker from the type onto the name.
    fn render_name_and_type(&self, name: &str, ty: &TypeReference) -> String {
        let text = self.mapper.render_type(ty);
        match split_nullable(&text) {
            (base, true) => format!("{}?: {}", name, base),
            (base, false) => format!("{}: {}", name, base),
        }
    }

    fn render_method(&self, method: &Method, opts: &RenderOptions) -> Result<String> {
        let mut out = String::from("\n");

        if !method.doc.is_empty() {
            let lines: Vec<String> = method
                .doc
                .iter()
                .flat_map(|line| line.split('\n'))
                .map(|line| line.trim_end_matches('\r').to_string())
                .collect();
            let mut doc = CodeBuilder::at_level(opts.unit, opts.indent);
            doc.push_jsdoc(&lines);
            out.push_str(doc.as_str());
        }

        let name: &str = if method.is_constructor {
            "constructor"
        } else {
            &method.name
        };
        let params: Vec<String> = method
            .parameters
            .iter()
            .map(|p| format!("{}: {}", p.name, self.mapper.render_type(&p.ty)))
            .collect();

        out.push_str(&opts.indent_str());
        out.push_str(name);
        out.push('(');
        out.push_str(&params.join(", "));
        out.push(')');
        out.push_str(&self.render_return_clause(method));
        out.push_str("{\n");
        out.push_str(&self.render_statement_block(&method.body, opts)?);
        out.push_str(&opts.indent_str());
        out.push_str("}\n");
        Ok(out)
    }

    fn render_return_clause(&self, method: &Method) -> String {
        if method.is_constructor {
            return String::new();
        }
        let Some(ty) = &method.return_type else {
            return String::new();
        };
        let text = self.mapper.render_type(ty);
        if text == "void" {
            String::new()
        } else if text.contains(NULLABLE_MARKER) {
            ": any".to_string()
        } else {
            format!(": {}", text)
        }
    }
}

fn describe_member(member: &Member) -> String {
    match member {
        Member::Field { name, .. } => format!("field '{}'", name),
        Member::Property { name, .. } => format!("property '{}'", name),
        Member::Method(method) => format!("method '{}'", method.name),
        Member::Snippet { .. } => "a snippet".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use tsdom_ir::{Expression, Literal, Statement, TypeParameter};

    use super::*;

    fn render(decl: &TypeDeclaration) -> String {
        Emitter::new()
            .render_type_declaration(decl, &RenderOptions::default())
            .unwrap()
    }

    #[test]
    fn test_empty_class() {
        assert_eq!(render(&TypeDeclaration::class("Hero")), "export class Hero {\n}\n");
    }

    #[test]
    fn test_private_interface() {
        assert_eq!(
            render(&TypeDeclaration::interface("Named").private()),
            "interface Named {\n}\n"
        );
    }

    #[test]
    fn test_generic_clause_uses_first_constraint() {
        let decl = TypeDeclaration::class("Box")
            .type_parameter(
                TypeParameter::new("T")
                    .constraint(TypeReference::new("Base"))
                    .constraint(TypeReference::new("Ignored")),
            )
            .type_parameter(TypeParameter::new("U"));
        assert_eq!(
            Emitter::new().render_generic_parameter_clause(&decl),
            "<T extends Base, U>"
        );
    }

    #[test]
    fn test_base_clause_filters_and_joins_without_space() {
        let decl = TypeDeclaration::class("Hero")
            .base_type(TypeReference::new("Person"))
            .base_type(TypeReference::new("System.Object"))
            .base_type(TypeReference::new("Named"));
        assert_eq!(
            Emitter::new().render_base_type_clause(&decl),
            " extends Person,Named"
        );
    }

    #[test]
    fn test_enum_ignores_generics_and_bases() {
        let decl = TypeDeclaration::enum_("Color")
            .type_parameter(TypeParameter::new("T"))
            .base_type(TypeReference::new("Person"))
            .member(Member::enum_member("Red", None));
        assert_eq!(render(&decl), "export enum Color {Red}\n");
    }

    #[test]
    fn test_enum_members_inline() {
        let decl = TypeDeclaration::enum_("Color").members([
            Member::enum_member("A", None),
            Member::enum_member("B", Some(Expression::int(2))),
            Member::enum_member("C", None),
        ]);
        assert_eq!(render(&decl), "export enum Color {A, B=2, C}\n");
    }

    #[test]
    fn test_enum_non_constant_initializer() {
        let decl = TypeDeclaration::enum_("Color").member(Member::enum_member(
            "Red",
            Some(Expression::variable("x")),
        ));
        let err = Emitter::new()
            .render_type_declaration(&decl, &RenderOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            EmitError::NonConstantEnumInitializer {
                enum_name: "Color".into(),
                member: "Red".into(),
            }
        );
    }

    #[test]
    fn test_enum_rejects_methods() {
        let decl = TypeDeclaration::enum_("Color").member(Method::new("paint").into());
        let err = Emitter::new()
            .render_type_declaration(&decl, &RenderOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            EmitError::InvalidEnumMember {
                enum_name: "Color".into(),
                member: "method 'paint'".into(),
            }
        );
    }

    #[test]
    fn test_nullable_fields_are_flattened() {
        let decl = TypeDeclaration::class("Hero").members([
            Member::field("name", TypeReference::string().nullable()),
            Member::property(
                "age",
                TypeReference::generic("Nullable", vec![TypeReference::int()]),
            ),
            Member::field("id", TypeReference::int()),
        ]);
        assert_eq!(
            render(&decl),
            "export class Hero {\n    name?: string;\n    age?: number;\n    id: number;\n}\n"
        );
    }

    #[test]
    fn test_method_signature() {
        let decl = TypeDeclaration::class("ValuesClient").member(
            Method::new("GetAsync")
                .param("id", TypeReference::int())
                .returns(TypeReference::string().nullable())
                .into(),
        );
        assert_eq!(
            render(&decl),
            "export class ValuesClient {\n\n    GetAsync(id: number): any{\n    }\n}\n"
        );
    }

    #[test]
    fn test_constructor_and_void_have_no_return_clause() {
        let decl = TypeDeclaration::class("C").members([
            Method::constructor()
                .param("baseUri", TypeReference::string())
                .returns(TypeReference::string())
                .into(),
            Method::new("run").returns(TypeReference::void()).into(),
            Method::new("count").returns(TypeReference::int()).into(),
        ]);
        assert_eq!(
            render(&decl),
            "export class C {\n\
             \n    constructor(baseUri: string){\n    }\n\
             \n    run(){\n    }\n\
             \n    count(): number{\n    }\n\
             }\n"
        );
    }

    #[test]
    fn test_nested_nullable_return_becomes_any() {
        let decl = TypeDeclaration::class("C").member(
            Method::new("list")
                .returns(TypeReference::generic(
                    "List",
                    vec![TypeReference::int().nullable()],
                ))
                .into(),
        );
        assert!(render(&decl).contains("    list(): any{\n"));
    }

    #[test]
    fn test_method_doc_and_body() {
        let decl = TypeDeclaration::class("C").member(
            Method::new("get")
                .doc_line("Get it\nGET api/it")
                .statement(Statement::return_(Expression::primitive(Literal::Null)))
                .into(),
        );
        assert_eq!(
            render(&decl),
            "export class C {\n\
             \n    /**\n     * Get it\n     * GET api/it\n     */\n\
             \x20   get(){\n        return null;\n    }\n\
             }\n"
        );
    }

    #[test]
    fn test_snippet_member_and_names_untouched() {
        let decl = TypeDeclaration::class("C").members([
            Member::snippet("private readonly x = 1;"),
            Member::field("Some_Name", TypeReference::new("Hero")),
        ]);
        assert_eq!(
            render(&decl),
            "export class C {\n    private readonly x = 1;\n    Some_Name: Hero;\n}\n"
        );
    }

    #[test]
    fn test_indentation_starts_and_ends_at_depth() {
        let decl = TypeDeclaration::class("Hero")
            .member(Member::field("name", TypeReference::string()));
        let text = Emitter::new()
            .render_type_declaration(&decl, &RenderOptions::default().with_indent(1))
            .unwrap();
        assert_eq!(
            text,
            "    export class Hero {\n        name: string;\n    }\n"
        );
    }
}
