//! Naming derivation.
//!
//! Every identifier that appears in more than one generated layer is
//! computed here, once, from the entity name. Layers receive a
//! [`DerivedNames`] and never re-derive names themselves, which is what keeps
//! an import in the router pointing at the file the controller generator
//! actually wrote.
//!
//! | Name              | `Product`            | `order_item`             |
//! |-------------------|----------------------|--------------------------|
//! | `type_name`       | `Product`            | `OrderItem`              |
//! | `var_name`        | `product`            | `orderItem`              |
//! | `collection_name` | `products`           | `orderItems`             |
//! | `route_segment`   | `products`           | `order-items`            |
//! | `file_base`       | `product`            | `orderItem`              |
//! | `interface_name`  | `IProductRepository` | `IOrderItemRepository`   |
//!
//! Pluralization appends `s`. Irregular plurals (`Person` → `persons`) are
//! not special-cased.

use convert_case::{Case, Casing};
use serde::Serialize;

use crate::domain::{entities::schema::validate_identifier, error::DomainError, value_objects::Layer};

/// Words that cannot be used as a binding name in the generated code.
const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Variable names the generated code binds in the same scope as the entity.
const TEMPLATE_BINDINGS: &[&str] = &[
    "app", "data", "error", "express", "id", "limit", "mongoose", "offset", "port", "req", "res",
    "result", "router",
];

/// Type names the generated modules import or rely on as globals.
const TEMPLATE_TYPES: &[&str] = &[
    "Array", "Boolean", "Date", "Document", "Number", "Object", "Omit", "Promise", "Request",
    "Response", "Schema", "String", "Types",
];

/// Identifiers derived from one entity name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DerivedNames {
    pub type_name: String,
    pub var_name: String,
    pub collection_name: String,
    pub route_segment: String,
    pub file_base: String,
    pub interface_name: String,
}

impl DerivedNames {
    /// Derive all names for `entity_name`.
    ///
    /// # Errors
    /// `InvalidIdentifier` if the name is not an identifier, normalizes to
    /// nothing (`"___"`), or yields a reserved word as a binding name.
    pub fn derive(entity_name: &str) -> Result<Self, DomainError> {
        validate_identifier(entity_name)?;

        let type_name = entity_name.to_case(Case::UpperCamel);
        if type_name.is_empty() {
            return Err(DomainError::invalid_identifier(
                entity_name,
                "name has no letters or digits",
            ));
        }

        let var_name = entity_name.to_case(Case::Camel);
        if var_name.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(DomainError::invalid_identifier(
                entity_name,
                "derived variable name would start with a digit",
            ));
        }
        if RESERVED_WORDS.contains(&var_name.as_str()) {
            return Err(DomainError::invalid_identifier(
                entity_name,
                format!("'{var_name}' is a reserved word"),
            ));
        }

        if TEMPLATE_BINDINGS.contains(&var_name.as_str()) {
            return Err(DomainError::invalid_identifier(
                entity_name,
                format!("'{var_name}' clashes with a name the generated code binds"),
            ));
        }
        if TEMPLATE_TYPES.contains(&type_name.as_str()) {
            return Err(DomainError::invalid_identifier(
                entity_name,
                format!("'{type_name}' clashes with a type the generated code uses"),
            ));
        }

        Ok(Self {
            collection_name: pluralize(&var_name),
            route_segment: pluralize(&entity_name.to_case(Case::Kebab)),
            file_base: var_name.clone(),
            interface_name: format!("I{type_name}Repository"),
            type_name,
            var_name,
        })
    }

    /// File stem (no extension) of the artifact a layer writes.
    pub fn module_stem(&self, layer: Layer) -> String {
        match layer {
            Layer::Model => self.file_base.clone(),
            Layer::Interface => self.interface_name.clone(),
            Layer::Repository => format!("{}Repository", self.file_base),
            Layer::Service => format!("{}Service", self.file_base),
            Layer::Controller => format!("{}Controller", self.file_base),
            Layer::Router => format!("{}Router", self.file_base),
            Layer::Entry => "index".to_string(),
            Layer::PackageManifest => "package".to_string(),
            Layer::CompilerConfig => "tsconfig".to_string(),
        }
    }

    /// Local binding a layer's module is imported under by its dependents.
    ///
    /// The model is bound as `<Type>Model` so the bare type name stays free
    /// for the entity interface.
    pub fn module_binding(&self, layer: Layer) -> String {
        match layer {
            Layer::Model => format!("{}Model", self.type_name),
            _ => self.module_stem(layer),
        }
    }

    /// Mount path of the entity's router, e.g. `/products`.
    pub fn mount_path(&self) -> String {
        format!("/{}", self.route_segment)
    }
}

fn pluralize(word: &str) -> String {
    format!("{word}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_product_names() {
        let names = DerivedNames::derive("Product").unwrap();
        assert_eq!(names.type_name, "Product");
        assert_eq!(names.var_name, "product");
        assert_eq!(names.collection_name, "products");
        assert_eq!(names.route_segment, "products");
        assert_eq!(names.file_base, "product");
        assert_eq!(names.interface_name, "IProductRepository");
        assert_eq!(names.mount_path(), "/products");
    }

    #[test]
    fn derives_multi_word_names() {
        for input in ["OrderItem", "order_item", "orderItem"] {
            let names = DerivedNames::derive(input).unwrap();
            assert_eq!(names.type_name, "OrderItem", "input {input}");
            assert_eq!(names.var_name, "orderItem", "input {input}");
            assert_eq!(names.route_segment, "order-items", "input {input}");
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(
            DerivedNames::derive("Invoice").unwrap(),
            DerivedNames::derive("Invoice").unwrap()
        );
    }

    #[test]
    fn pluralization_is_suffix_only() {
        assert_eq!(DerivedNames::derive("Person").unwrap().route_segment, "persons");
        assert_eq!(DerivedNames::derive("Box").unwrap().route_segment, "boxs");
    }

    #[test]
    fn rejects_invalid_identifiers() {
        for bad in ["", "123Bad", "my-entity", "a b", "___"] {
            let err = DerivedNames::derive(bad).unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidIdentifier { .. }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_reserved_binding() {
        let err = DerivedNames::derive("Class").unwrap_err();
        assert!(matches!(err, DomainError::InvalidIdentifier { reason, .. } if reason.contains("reserved")));
    }

    #[test]
    fn rejects_names_bound_by_templates() {
        for bad in [
            "Data", "Result", "Schema", "Request", "Promise", "Omit", "Date", "Number", "String",
            "Boolean", "Object", "Array",
        ] {
            assert!(DerivedNames::derive(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn module_stems_follow_file_base() {
        let names = DerivedNames::derive("Product").unwrap();
        assert_eq!(names.module_stem(Layer::Controller), "productController");
        assert_eq!(names.module_stem(Layer::Interface), "IProductRepository");
        assert_eq!(names.module_binding(Layer::Model), "ProductModel");
        assert_eq!(names.module_binding(Layer::Service), "productService");
    }
}
