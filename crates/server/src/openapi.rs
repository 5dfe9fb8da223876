//! OpenAPI document assembled from the entity descriptors.
//!
//! Every table gets three schemas (`X`, `NewX`, `XPatch`) and the same five
//! operations, so the document is built with the utoipa builders instead of
//! per-handler annotations.

use models::descriptor::{registry, EntityDescriptor, FieldDescriptor, FieldType};
use once_cell::sync::Lazy;
use utoipa::openapi::path::{OperationBuilder, ParameterBuilder, ParameterIn, PathItemBuilder, PathItemType};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::schema::{ArrayBuilder, KnownFormat, ObjectBuilder, Schema, SchemaFormat, SchemaType};
use utoipa::openapi::tag::TagBuilder;
use utoipa::openapi::{
    ComponentsBuilder, ContentBuilder, InfoBuilder, OpenApi, OpenApiBuilder, PathsBuilder, Ref, RefOr,
    Required, ResponseBuilder,
};

const JSON: &str = "application/json";

static DOCUMENT: Lazy<OpenApi> = Lazy::new(build);

pub fn document() -> &'static OpenApi {
    &DOCUMENT
}

fn build() -> OpenApi {
    let mut paths = PathsBuilder::new().path(
        "/health",
        PathItemBuilder::new()
            .operation(
                PathItemType::Get,
                OperationBuilder::new()
                    .tag("System")
                    .operation_id(Some("health"))
                    .response("200", RefOr::T(ResponseBuilder::new().description("Service is up").build()))
                    .build(),
            )
            .build(),
    );
    let mut components = ComponentsBuilder::new().schema("Error", RefOr::T(Schema::Object(error_schema())));
    let mut tags = vec![TagBuilder::new().name("System").build()];

    for d in registry() {
        paths = paths
            .path(format!("/{}", d.route), collection_item(d))
            .path(format!("/{}/{{id}}", d.route), member_item(d));
        components = components
            .schema(d.name, RefOr::T(Schema::Object(record_schema(d))))
            .schema(format!("New{}", d.name), RefOr::T(Schema::Object(create_schema(d))))
            .schema(format!("{}Patch", d.name), RefOr::T(Schema::Object(patch_schema(d))));
        tags.push(TagBuilder::new().name(d.tag).build());
    }

    OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title("Polyclinic records API")
                .version(env!("CARGO_PKG_VERSION"))
                .description(Some("Create, read, update and delete for every clinic record type."))
                .build(),
        )
        .paths(paths.build())
        .components(Some(components.build()))
        .tags(Some(tags))
        .build()
}

fn inline(builder: ObjectBuilder) -> RefOr<Schema> {
    RefOr::T(Schema::Object(builder.build()))
}

fn schema_ref(name: &str) -> RefOr<Schema> {
    RefOr::Ref(Ref::from_schema_name(name))
}

fn json_response(description: &str, schema: RefOr<Schema>) -> RefOr<utoipa::openapi::Response> {
    RefOr::T(
        ResponseBuilder::new()
            .description(description)
            .content(JSON, ContentBuilder::new().schema(schema).build())
            .build(),
    )
}

fn error_response(description: &str) -> RefOr<utoipa::openapi::Response> {
    json_response(description, schema_ref("Error"))
}

fn json_body(schema_name: String) -> Option<utoipa::openapi::request_body::RequestBody> {
    Some(
        RequestBodyBuilder::new()
            .content(JSON, ContentBuilder::new().schema(schema_ref(&schema_name)).build())
            .required(Some(Required::True))
            .build(),
    )
}

fn collection_item(d: &EntityDescriptor) -> utoipa::openapi::PathItem {
    let list = OperationBuilder::new()
        .tag(d.tag)
        .operation_id(Some(format!("list_{}", d.route)))
        .summary(Some(format!("List every {}", d.name)))
        .response(
            "200",
            json_response(
                "All records",
                RefOr::T(Schema::Array(ArrayBuilder::new().items(schema_ref(d.name)).build())),
            ),
        )
        .build();
    let create = OperationBuilder::new()
        .tag(d.tag)
        .operation_id(Some(format!("create_{}", d.route)))
        .summary(Some(format!("Create a {}", d.name)))
        .request_body(json_body(format!("New{}", d.name)))
        .response("200", json_response("Created record", schema_ref(d.name)))
        .response("409", error_response("A referenced row is missing or a unique column is taken"))
        .response("422", error_response("Malformed or invalid payload"))
        .build();
    PathItemBuilder::new()
        .operation(PathItemType::Get, list)
        .operation(PathItemType::Post, create)
        .build()
}

fn member_item(d: &EntityDescriptor) -> utoipa::openapi::PathItem {
    let id_param = || {
        ParameterBuilder::new()
            .name("id")
            .parameter_in(ParameterIn::Path)
            .required(Required::True)
            .schema(Some(inline(
                ObjectBuilder::new()
                    .schema_type(SchemaType::Integer)
                    .format(Some(SchemaFormat::KnownFormat(KnownFormat::Int32))),
            )))
            .build()
    };
    let base = |verb: &str, summary: String| {
        OperationBuilder::new()
            .tag(d.tag)
            .operation_id(Some(format!("{verb}_{}", d.route)))
            .summary(Some(summary))
            .parameter(id_param())
            .response("400", error_response("Id is not an integer"))
            .response("404", error_response("No such record"))
    };

    let get = base("get", format!("Fetch one {}", d.name))
        .response("200", json_response("The record", schema_ref(d.name)))
        .build();
    let patch = base("update", format!("Change some fields of a {}", d.name))
        .request_body(json_body(format!("{}Patch", d.name)))
        .response("200", json_response("Updated record", schema_ref(d.name)))
        .response("409", error_response("A referenced row is missing or a unique column is taken"))
        .response("422", error_response("Required field set to null or invalid value"))
        .build();
    let delete = base("delete", format!("Delete a {}", d.name))
        .response(
            "200",
            json_response(
                "Deleted",
                RefOr::T(Schema::Object(
                    ObjectBuilder::new()
                        .property("ok", inline(ObjectBuilder::new().schema_type(SchemaType::Boolean)))
                        .required("ok")
                        .build(),
                )),
            ),
        )
        .build();

    PathItemBuilder::new()
        .operation(PathItemType::Get, get)
        .operation(PathItemType::Patch, patch)
        .operation(PathItemType::Delete, delete)
        .build()
}

fn field_schema(field: &FieldDescriptor) -> ObjectBuilder {
    let builder = match field.ty {
        FieldType::Integer => ObjectBuilder::new()
            .schema_type(SchemaType::Integer)
            .format(Some(SchemaFormat::KnownFormat(KnownFormat::Int32))),
        FieldType::Text => ObjectBuilder::new().schema_type(SchemaType::String),
        FieldType::Decimal => ObjectBuilder::new()
            .schema_type(SchemaType::String)
            .format(Some(SchemaFormat::Custom("decimal".into())))
            .description(Some("Fixed-point amount with two fraction digits")),
        FieldType::Date => ObjectBuilder::new()
            .schema_type(SchemaType::String)
            .format(Some(SchemaFormat::KnownFormat(KnownFormat::Date))),
        FieldType::Time => ObjectBuilder::new()
            .schema_type(SchemaType::String)
            .format(Some(SchemaFormat::Custom("time".into())))
            .description(Some("HH:MM:SS")),
        FieldType::DateTime => ObjectBuilder::new()
            .schema_type(SchemaType::String)
            .format(Some(SchemaFormat::Custom("date-time-local".into())))
            .description(Some("YYYY-MM-DDTHH:MM:SS without offset")),
    };
    let builder = match field.reference {
        Some(r) => builder.description(Some(format!("Id of a {}", r.target))),
        None => builder,
    };
    builder.nullable(field.nullable)
}

fn record_schema(d: &EntityDescriptor) -> utoipa::openapi::schema::Object {
    let mut object = ObjectBuilder::new()
        .schema_type(SchemaType::Object)
        .property(
            "id",
            inline(
                ObjectBuilder::new()
                    .schema_type(SchemaType::Integer)
                    .format(Some(SchemaFormat::KnownFormat(KnownFormat::Int32))),
            ),
        )
        .required("id");
    for f in d.fields {
        object = object.property(f.name, inline(field_schema(f)));
        if !f.nullable {
            object = object.required(f.name);
        }
    }
    object.build()
}

fn create_schema(d: &EntityDescriptor) -> utoipa::openapi::schema::Object {
    let mut object = ObjectBuilder::new().schema_type(SchemaType::Object);
    for f in d.fields {
        object = object.property(f.name, inline(field_schema(f)));
        if f.required_on_create() {
            object = object.required(f.name);
        }
    }
    object.build()
}

/// Every field optional; `null` only where the column is nullable.
fn patch_schema(d: &EntityDescriptor) -> utoipa::openapi::schema::Object {
    d.fields
        .iter()
        .fold(ObjectBuilder::new().schema_type(SchemaType::Object), |object, f| {
            object.property(f.name, inline(field_schema(f)))
        })
        .build()
}

fn error_schema() -> utoipa::openapi::schema::Object {
    ObjectBuilder::new()
        .schema_type(SchemaType::Object)
        .property("error", inline(ObjectBuilder::new().schema_type(SchemaType::String)))
        .property("detail", inline(ObjectBuilder::new().schema_type(SchemaType::String)))
        .required("error")
        .build()
}
