//! Client skeleton builders.
//!
//! [`ClientFunctionBuilder`] turns one [`ApiOperation`] into a method tree;
//! [`ClientClassBuilder`] collects those methods into the client class.

use std::collections::HashMap;

use thiserror::Error;
use tsdom_codegen::TypeMapper;
use tsdom_ir::{Expression, Literal, Member, Method, Statement, TypeDeclaration, TypeReference};
use tsdom_manifest::{ApiOperation, ClientConfig, HttpMethod, UriPart, UriTemplate};

use crate::{TypeScriptTypeMapper, naming::client_method_name};

/// Errors raised while building client skeletons.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("operation '{operation}' uses URI variable '{variable}' which is not a parameter")]
    UnknownUriVariable { operation: String, variable: String },

    #[error("operations '{first}' and '{second}' both generate the method '{method}'")]
    DuplicateMethod {
        method: String,
        first: String,
        second: String,
    },
}

/// Builds the method for a single API operation.
#[derive(Debug, Clone, Default)]
pub struct ClientFunctionBuilder<M = TypeScriptTypeMapper> {
    mapper: M,
    camel_case: bool,
}

impl ClientFunctionBuilder {
    /// Create a builder with the TypeScript type mapper.
    pub fn new(camel_case: bool) -> Self {
        Self {
            mapper: TypeScriptTypeMapper,
            camel_case,
        }
    }
}

impl<M: TypeMapper> ClientFunctionBuilder<M> {
    /// Create a builder with a custom type mapper.
    pub fn with_mapper(mapper: M, camel_case: bool) -> Self {
        Self { mapper, camel_case }
    }

    /// Get the method name generated for an operation.
    pub fn method_name(&self, operation: &ApiOperation) -> String {
        client_method_name(&operation.name, self.camel_case)
    }

    /// Build the method for an operation.
    #[tracing::instrument(skip_all, fields(operation = %operation.name, method = %operation.method))]
    pub fn build(&self, operation: &ApiOperation) -> Result<Method, ClientError> {
        let mut method = Method::new(self.method_name(operation));
        method.doc = self.doc_lines(operation);

        for param in &operation.parameters {
            method = method.param(&param.name, param.ty.clone());
        }

        method = method.returns(match &operation.response {
            Some(response) => TypeReference::generic("Task", vec![response.clone()]),
            None => TypeReference::new("Task"),
        });

        let verb = match operation.method {
            HttpMethod::Get => "get",
            HttpMethod::Delete => "delete",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch | HttpMethod::Head | HttpMethod::Options => {
                tracing::warn!(
                    "HTTP method {} is not yet supported, generating an empty body",
                    operation.method
                );
                return Ok(method);
            }
        };

        let mut args = vec![Self::uri_expression(operation)?];
        if operation.method.has_body() {
            args.push(match operation.body_parameter() {
                Some(body) => Expression::argument(&body.name),
                None => Expression::primitive(Literal::Null),
            });
        }

        let http = Expression::field(Expression::This, "http");
        Ok(method.statement(Statement::return_(Expression::invoke(http, verb, args))))
    }

    fn doc_lines(&self, operation: &ApiOperation) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(doc) = &operation.documentation {
            lines.push(doc.clone());
        }
        lines.push(format!("{} {}", operation.method, operation.path));

        for param in &operation.parameters {
            let line = format!(
                "@param {{{}}} {} {}",
                self.mapper.render_type(&param.ty),
                param.name,
                param.documentation.as_deref().unwrap_or_default()
            );
            lines.push(line.trim_end().to_string());
        }

        let response = match &operation.response {
            Some(ty) => self.mapper.render_type(ty),
            None => "void".to_string(),
        };
        let line = format!(
            "@return {{{}}} {}",
            response,
            operation.response_documentation.as_deref().unwrap_or_default()
        );
        lines.push(line.trim_end().to_string());

        lines
    }

    /// Build `this.baseUri + 'path'` with URI variables spliced in as arguments.
    fn uri_expression(operation: &ApiOperation) -> Result<Expression, ClientError> {
        let mut path = String::new();
        for part in UriTemplate::parse(&operation.path).parts() {
            match part {
                UriPart::Literal(text) => path.push_str(&escape_single_quoted(text)),
                UriPart::Variable { name } => {
                    let param = operation.parameter(name).ok_or_else(|| {
                        ClientError::UnknownUriVariable {
                            operation: operation.name.clone(),
                            variable: name.to_string(),
                        }
                    })?;
                    path.push_str(&format!("'+{}+'", param.name));
                }
            }
        }

        let mut uri = format!("this.baseUri + '{}'", path);
        if let Some(pos) = uri.find("+''") {
            uri.replace_range(pos..pos + 3, "");
        }
        Ok(Expression::snippet(uri))
    }
}

/// Builds the exported client class.
#[derive(Debug, Clone)]
pub struct ClientClassBuilder<M = TypeScriptTypeMapper> {
    name: String,
    functions: ClientFunctionBuilder<M>,
}

impl ClientClassBuilder {
    /// Create a builder from the `[client]` configuration.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            name: config.name.clone(),
            functions: ClientFunctionBuilder::new(config.camel_case),
        }
    }
}

impl<M: TypeMapper> ClientClassBuilder<M> {
    /// Create a builder with a custom function builder.
    pub fn with_functions(name: impl Into<String>, functions: ClientFunctionBuilder<M>) -> Self {
        Self {
            name: name.into(),
            functions,
        }
    }

    /// Build the client class with one method per operation.
    pub fn build(&self, operations: &[ApiOperation]) -> Result<TypeDeclaration, ClientError> {
        let mut class = TypeDeclaration::class(&self.name).member(Member::snippet(
            "constructor(private baseUri: string, private http: HttpClient) {}",
        ));

        let mut seen: HashMap<String, &str> = HashMap::new();
        for operation in operations {
            let method = self.functions.build(operation)?;
            if let Some(first) = seen.insert(method.name.clone(), &operation.name) {
                return Err(ClientError::DuplicateMethod {
                    method: method.name,
                    first: first.to_string(),
                    second: operation.name.clone(),
                });
            }
            class = class.member(method.into());
        }

        tracing::debug!(client = %self.name, methods = seen.len(), "built client class");
        Ok(class)
    }
}

fn escape_single_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use tsdom_manifest::Manifest;

    use super::*;

    fn operations(src: &str) -> Vec<ApiOperation> {
        let manifest: Manifest = src.parse().unwrap();
        manifest.operations
    }

    fn single(src: &str) -> ApiOperation {
        operations(&format!("[client]\nname = \"C\"\n{}", src)).remove(0)
    }

    #[test]
    fn test_get_method() {
        let op = single(
            r#"
            [[operations]]
            name = "GetAsync"
            method = "GET"
            path = "api/Values/{id}"
            documentation = "Get a value"
            response = { name = "string", nullable = true }
            parameters = [{ name = "id", type = { name = "int" }, documentation = "the id" }]
            "#,
        );
        let method = ClientFunctionBuilder::new(true).build(&op).unwrap();

        assert_eq!(method.name, "get");
        assert_eq!(
            method.doc,
            vec![
                "Get a value",
                "GET api/Values/{id}",
                "@param {number} id the id",
                "@return {string?}",
            ]
        );
        assert_eq!(
            method.return_type,
            Some(TypeReference::generic(
                "Task",
                vec![TypeReference::string().nullable()]
            ))
        );
        assert_eq!(
            method.body,
            vec![Statement::return_(Expression::invoke(
                Expression::field(Expression::This, "http"),
                "get",
                vec![Expression::snippet("this.baseUri + 'api/Values/'+id")],
            ))]
        );
    }

    #[test]
    fn test_post_uses_body_parameter() {
        let op = single(
            r#"
            [[operations]]
            name = "Post"
            method = "POST"
            path = "api/Values"
            parameters = [{ name = "value", type = { name = "string" }, from_body = true }]
            "#,
        );
        let method = ClientFunctionBuilder::new(true).build(&op).unwrap();
        assert_eq!(method.name, "post");
        assert_eq!(method.return_type, Some(TypeReference::new("Task")));
        assert_eq!(
            method.body,
            vec![Statement::return_(Expression::invoke(
                Expression::field(Expression::This, "http"),
                "post",
                vec![
                    Expression::snippet("this.baseUri + 'api/Values'"),
                    Expression::argument("value"),
                ],
            ))]
        );
        assert_eq!(method.doc.last().map(String::as_str), Some("@return {void}"));
    }

    #[test]
    fn test_put_without_body_sends_null() {
        let op = single(
            r#"
            [[operations]]
            name = "Touch"
            method = "PUT"
            path = "api/Values/{id}/touch"
            parameters = [{ name = "id", type = { name = "int" } }]
            "#,
        );
        let method = ClientFunctionBuilder::new(false).build(&op).unwrap();
        assert_eq!(method.name, "Touch");
        assert_eq!(
            method.body,
            vec![Statement::return_(Expression::invoke(
                Expression::field(Expression::This, "http"),
                "put",
                vec![
                    Expression::snippet("this.baseUri + 'api/Values/'+id+'/touch'"),
                    Expression::primitive(Literal::Null),
                ],
            ))]
        );
    }

    #[test]
    fn test_query_variables_match_case_insensitively() {
        let op = single(
            r#"
            [[operations]]
            name = "Search"
            method = "GET"
            path = "api/Heroes?name={Name}&take={take}"
            parameters = [
                { name = "name", type = { name = "string" } },
                { name = "take", type = { name = "int" } },
            ]
            "#,
        );
        let uri = ClientFunctionBuilder::<TypeScriptTypeMapper>::uri_expression(&op).unwrap();
        assert_eq!(
            uri,
            Expression::snippet("this.baseUri + 'api/Heroes?name='+name+'&take='+take")
        );
    }

    #[test]
    fn test_unsupported_verb_has_empty_body() {
        let op = single(
            r#"
            [[operations]]
            name = "Patch"
            method = "PATCH"
            path = "api/Values"
            "#,
        );
        let method = ClientFunctionBuilder::new(true).build(&op).unwrap();
        assert_eq!(method.name, "patch");
        assert!(method.body.is_empty());
    }

    #[test]
    fn test_class_with_duplicate_method_names() {
        let ops = operations(
            r#"
            [client]
            name = "ValuesClient"

            [[operations]]
            name = "GetAsync"
            method = "GET"
            path = "a"

            [[operations]]
            name = "Get"
            method = "GET"
            path = "b"
            "#,
        );
        let config = ClientConfig {
            name: "ValuesClient".into(),
            camel_case: true,
            header: None,
        };
        let err = ClientClassBuilder::new(&config).build(&ops).unwrap_err();
        assert_eq!(
            err,
            ClientError::DuplicateMethod {
                method: "get".into(),
                first: "GetAsync".into(),
                second: "Get".into(),
            }
        );
    }

    #[test]
    fn test_class_members() {
        let ops = operations(
            r#"
            [client]
            name = "ValuesClient"

            [[operations]]
            name = "GetAll"
            method = "GET"
            path = "api/Values"
            "#,
        );
        let config = ClientConfig {
            name: "ValuesClient".into(),
            camel_case: true,
            header: None,
        };
        let class = ClientClassBuilder::new(&config).build(&ops).unwrap();
        assert_eq!(class.name, "ValuesClient");
        assert!(class.visibility.is_public());
        assert_eq!(class.members.len(), 2);
        assert_eq!(class.members[0].name(), None);
        assert_eq!(class.members[1].name(), Some("getAll"));
    }

    #[test]
    fn test_quotes_in_path_are_escaped() {
        let op = ApiOperation {
            name: "Odd".into(),
            method: HttpMethod::Get,
            path: "api/it's".into(),
            documentation: None,
            response: None,
            response_documentation: None,
            parameters: vec![],
        };
        let uri = ClientFunctionBuilder::<TypeScriptTypeMapper>::uri_expression(&op).unwrap();
        assert_eq!(uri, Expression::snippet("this.baseUri + 'api/it\\'s'"));
    }

    #[test]
    fn test_unknown_uri_variable() {
        let op = ApiOperation {
            name: "Get".into(),
            method: HttpMethod::Get,
            path: "api/{id}".into(),
            documentation: None,
            response: None,
            response_documentation: None,
            parameters: vec![],
        };
        let err = ClientFunctionBuilder::new(true).build(&op).unwrap_err();
        assert_eq!(
            err,
            ClientError::UnknownUriVariable {
                operation: "Get".into(),
                variable: "id".into(),
            }
        );
    }
}
