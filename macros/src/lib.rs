use syn::{parse_macro_input, DeriveInput};
mod named_type;

/// Derives `NamedType` and `HasTypeTag` for a value variant.
///
/// The tag defaults to the struct's own name; use `#[type_tag(Name)]` when they differ.
#[proc_macro_derive(NamedType, attributes(type_tag))]
pub fn named_type(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	named_type::expand_named_type(input)
		.unwrap_or_else(|err| err.to_compile_error())
		.into()
}
