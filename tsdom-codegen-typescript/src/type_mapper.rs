//! TypeScript type mapper implementation.

use tsdom_codegen::{TypeMapper, split_nullable};
use tsdom_ir::TypeReference;

/// Mapped names that can never appear in an `extends` clause.
const NON_DERIVABLE: &[&str] = &["string", "number", "boolean", "any", "void", "Date"];

/// TypeScript type mapper implementation.
///
/// Maps .NET-style descriptor names (`System.Int32`, `List`, `Task`, ...)
/// onto TypeScript type text. Unknown names pass through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn map_name(&self, name: &str) -> String {
        let mapped = match name {
            "string" | "String" | "System.String" | "char" | "Char" | "System.Char" | "Guid"
            | "System.Guid" | "Uri" | "System.Uri" | "TimeSpan" | "System.TimeSpan" => "string",
            "int" | "long" | "short" | "byte" | "sbyte" | "uint" | "ulong" | "ushort" | "float"
            | "double" | "decimal" | "Int32" | "Int64" | "Int16" | "Byte" | "SByte" | "UInt32"
            | "UInt64" | "UInt16" | "Single" | "Double" | "Decimal" | "System.Int32"
            | "System.Int64" | "System.Int16" | "System.Byte" | "System.SByte"
            | "System.UInt32" | "System.UInt64" | "System.UInt16" | "System.Single"
            | "System.Double" | "System.Decimal" => "number",
            "bool" | "Boolean" | "System.Boolean" => "boolean",
            "DateTime" | "DateTimeOffset" | "System.DateTime" | "System.DateTimeOffset" => "Date",
            "object" | "Object" | "System.Object" => "any",
            "void" | "Void" | "System.Void" => "void",
            // A bare Task carries no result
            "Task" | "ValueTask" => "Promise<void>",
            other => other,
        };
        mapped.to_string()
    }

    fn map_generic(&self, name: &str, args: &[String]) -> String {
        match (base_name(name), args) {
            ("Nullable", [inner]) => self.map_nullable(inner),
            (
                "Array" | "List" | "IList" | "IEnumerable" | "ICollection" | "IReadOnlyList"
                | "IReadOnlyCollection" | "HashSet" | "ISet",
                [item],
            ) => format!("Array<{}>", item),
            ("Dictionary" | "IDictionary" | "IReadOnlyDictionary", [key, value]) => {
                format!("{{[id: {}]: {}}}", key, value)
            }
            ("Task" | "ValueTask", [result]) => format!("Promise<{}>", result),
            _ if args.is_empty() => self.map_name(name),
            _ => format!("{}<{}>", self.map_name(name), args.join(", ")),
        }
    }

    fn is_valid_for_derivation(&self, ty: &TypeReference) -> bool {
        if ty.nullable {
            return false;
        }
        let rendered = self.render_type(ty);
        let (base, nullable) = split_nullable(&rendered);
        !nullable && !NON_DERIVABLE.contains(&base)
    }
}

/// Strip a namespace prefix such as `System.Collections.Generic.`.
fn base_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}
