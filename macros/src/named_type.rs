use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, DeriveInput, Ident};

pub fn expand_named_type(input: DeriveInput) -> syn::Result<TokenStream> {
	let name = input.ident;
	let tag = type_tag(&input.attrs)?.unwrap_or_else(|| name.clone());

	// `TYPENAME` is read out of the name table, so the tag and the name can't drift apart.
	Ok(quote! {
		impl crate::value::HasTypeTag for #name {
			const TYPE_TAG: crate::value::Type = crate::value::Type::#tag;
		}

		impl crate::value::NamedType for #name {
			const TYPENAME: crate::value::Typename = crate::value::Type::#tag.name();
		}
	})
}

fn type_tag(attrs: &[Attribute]) -> syn::Result<Option<Ident>> {
	let mut tag = None;

	for attr in attrs.iter().filter(|attr| attr.path.is_ident("type_tag")) {
		if tag.is_some() {
			return Err(syn::Error::new_spanned(attr, "duplicate `type_tag` attribute"));
		}

		tag = Some(attr.parse_args::<Ident>()?);
	}

	Ok(tag)
}
