//! Intermediate representation shared by the layer templates.
//!
//! The five operations are declared once here. The interface, repository,
//! service, controller and router templates all iterate [`Operation::ALL`],
//! so operation names, parameter lists and route bindings cannot drift
//! between layers.

use std::fmt;

use crate::domain::{
    entities::{DerivedNames, EntitySchema},
    type_mapper::{TypeMapper, definition},
    value_objects::SyntaxProfile,
};

pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const DEFAULT_PAGE_OFFSET: u32 = 0;

/// One of the five CRUD operations every generated layer exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Update,
    Delete,
    Find,
    FindOne,
}

impl Operation {
    /// Fixed order: declaration order in every layer and route order in the router.
    pub const ALL: [Operation; 5] = [
        Operation::Create,
        Operation::Update,
        Operation::Delete,
        Operation::Find,
        Operation::FindOne,
    ];

    /// Binding name in generated code. `delete` is a reserved word, so the
    /// delete operation is bound as `remove`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "remove",
            Self::Find => "find",
            Self::FindOne => "findOne",
        }
    }

    pub const fn params(&self) -> &'static [Param] {
        match self {
            Self::Create => &[Param::Data],
            Self::Update => &[Param::Id, Param::Data],
            Self::Delete | Self::FindOne => &[Param::Id],
            Self::Find => &[Param::Limit, Param::Offset],
        }
    }

    pub const fn returns(&self) -> Returns {
        match self {
            Self::Create => Returns::One,
            Self::Update | Self::FindOne => Returns::Maybe,
            Self::Delete => Returns::Nothing,
            Self::Find => Returns::Many,
        }
    }

    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
            Self::Find | Self::FindOne => HttpMethod::Get,
        }
    }

    /// Path relative to the router's mount point.
    pub const fn route_path(&self) -> &'static str {
        match self {
            Self::Create | Self::Find => "/",
            Self::Update | Self::Delete | Self::FindOne => "/:id",
        }
    }

    pub const fn success_status(&self) -> u16 {
        match self {
            Self::Create => 201,
            Self::Delete => 204,
            Self::Update | Self::Find | Self::FindOne => 200,
        }
    }

    /// Parameter list as written in a declaration, annotated when typed.
    pub fn declared_params(&self, names: &DerivedNames, profile: SyntaxProfile) -> Vec<String> {
        self.params()
            .iter()
            .map(|p| {
                if profile.is_typed() {
                    format!("{}: {}", p.name(), p.annotation(names))
                } else {
                    p.name().to_string()
                }
            })
            .collect()
    }

    /// Parameter names as passed through to the next layer down.
    pub fn call_args(&self) -> String {
        self.params().iter().map(Param::name).collect::<Vec<_>>().join(", ")
    }

    /// Request expressions a controller passes for each parameter.
    pub fn request_args(&self) -> String {
        self.params()
            .iter()
            .map(Param::request_source)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Id,
    Data,
    Limit,
    Offset,
}

impl Param {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Data => "data",
            Self::Limit => "limit",
            Self::Offset => "offset",
        }
    }

    pub fn annotation(&self, names: &DerivedNames) -> String {
        match self {
            Self::Id => "string".to_string(),
            Self::Data => names.type_name.clone(),
            Self::Limit | Self::Offset => "number".to_string(),
        }
    }

    pub fn request_source(&self) -> String {
        match self {
            Self::Id => "req.params.id".to_string(),
            Self::Data => "req.body".to_string(),
            Self::Limit => format!("Number(req.query.limit ?? {DEFAULT_PAGE_LIMIT})"),
            Self::Offset => format!("Number(req.query.offset ?? {DEFAULT_PAGE_OFFSET})"),
        }
    }
}

/// Shape of an operation's resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Returns {
    One,
    Maybe,
    Many,
    Nothing,
}

impl Returns {
    pub fn annotation(&self, names: &DerivedNames) -> String {
        let ty = &names.type_name;
        match self {
            Self::One => ty.clone(),
            Self::Maybe => format!("{ty} | null"),
            Self::Many => format!("{ty}[]"),
            Self::Nothing => "void".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Method name on the framework router object.
    pub const fn router_fn(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One router binding: method and path to a controller handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteBinding {
    pub operation: Operation,
    pub method: HttpMethod,
    pub path: &'static str,
    pub handler: String,
}

impl RouteBinding {
    /// Full public path, e.g. `GET /products/:id`.
    pub fn describe(&self, names: &DerivedNames) -> String {
        let mount = names.mount_path();
        let path = if self.path == "/" { mount } else { format!("{mount}{}", self.path) };
        format!("{} {path}", self.method)
    }
}

/// Router bindings in [`Operation::ALL`] order.
pub fn route_table(controller_binding: &str) -> Vec<RouteBinding> {
    Operation::ALL
        .iter()
        .map(|op| RouteBinding {
            operation: *op,
            method: op.http_method(),
            path: op.route_path(),
            handler: format!("{controller_binding}.{}", op.name()),
        })
        .collect()
}

/// One persisted field with its rendered type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub schema_type: &'static str,
    pub annotation: Option<&'static str>,
    pub needs_types_import: bool,
}

/// Fields of `schema` in declaration order, mapped for `mapper`'s profile.
pub fn attributes(schema: &EntitySchema, mapper: TypeMapper) -> Vec<Attribute> {
    schema
        .fields()
        .iter()
        .map(|field| {
            let token = mapper.map(field.logical_type);
            Attribute {
                name: field.name.clone(),
                schema_type: token.schema,
                annotation: token.annotation,
                needs_types_import: mapper.profile().is_typed()
                    && definition(field.logical_type).needs_types_import,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> DerivedNames {
        DerivedNames::derive("Product").unwrap()
    }

    #[test]
    fn operation_names_are_fixed() {
        let names: Vec<_> = Operation::ALL.iter().map(Operation::name).collect();
        assert_eq!(names, ["create", "update", "remove", "find", "findOne"]);
    }

    #[test]
    fn route_table_matches_operation_order() {
        let routes = route_table("productController");
        let rendered: Vec<_> = routes.iter().map(|r| r.describe(&names())).collect();
        assert_eq!(
            rendered,
            [
                "POST /products",
                "PUT /products/:id",
                "DELETE /products/:id",
                "GET /products",
                "GET /products/:id",
            ]
        );
        assert_eq!(routes[2].handler, "productController.remove");
    }

    #[test]
    fn typed_params_carry_annotations() {
        assert_eq!(
            Operation::Update.declared_params(&names(), SyntaxProfile::Typed),
            ["id: string", "data: Product"]
        );
        assert_eq!(
            Operation::Find.declared_params(&names(), SyntaxProfile::Untyped),
            ["limit", "offset"]
        );
    }

    #[test]
    fn return_annotations() {
        let n = names();
        assert_eq!(Operation::Create.returns().annotation(&n), "Product");
        assert_eq!(Operation::FindOne.returns().annotation(&n), "Product | null");
        assert_eq!(Operation::Find.returns().annotation(&n), "Product[]");
        assert_eq!(Operation::Delete.returns().annotation(&n), "void");
    }

    #[test]
    fn pagination_defaults_in_request_args() {
        assert_eq!(
            Operation::Find.request_args(),
            "Number(req.query.limit ?? 10), Number(req.query.offset ?? 0)"
        );
        assert_eq!(Operation::Update.request_args(), "req.params.id, req.body");
    }
}
