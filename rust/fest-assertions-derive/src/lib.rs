use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{parse2, spanned::Spanned, *};

#[proc_macro_derive(EnumAssertions)]
pub fn enum_assertions(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input: TokenStream = input.into();

    impl_enum_assertions(input).into()
}

fn pascal_case_to_snake_case(name: impl ToString) -> String {
    let mut result = String::default();
    let mut first = true;

    for char in name.to_string().chars() {
        if char.is_uppercase() {
            if !first {
                result.push('_');
            }
            result.extend(char.to_lowercase());
        } else {
            result.push(char);
        }
        first = false;
    }

    result
}

fn impl_enum_assertions(input: TokenStream) -> TokenStream {
    let item: ItemEnum = match parse2(input) {
        Ok(item) => item,
        Err(err) => {
            return err.to_compile_error();
        },
    };

    if !item.generics.params.is_empty() {
        return Error::new(item.generics.span(), "EnumAssertions cannot be derived for generic enums").to_compile_error();
    }

    let vis = &item.vis;
    let class_name = &item.ident;
    let assertions_name = format_ident!("{}Assertions", item.ident);

    let is_funs = item.variants.iter().map(|v| {
        let fun_name = format_ident!("is_{}", pascal_case_to_snake_case(&v.ident));
        quote! {
            fn #fun_name(self) -> Self;
        }
    });

    let impl_funs = item.variants.iter().map(|v| {
        let fun_name = format_ident!("is_{}", pascal_case_to_snake_case(&v.ident));
        let variant_name = &v.ident;

        let match_pattern = match &v.fields {
            Fields::Unit => quote! { #class_name::#variant_name },
            Fields::Unnamed(_) => quote! { #class_name::#variant_name(..) },
            Fields::Named(_) => quote! { #class_name::#variant_name { .. } },
        };

        quote! {
            fn #fun_name(self) -> Self {
                let actual = self.actual_or_fail();

                if !matches!(::std::borrow::Borrow::<#class_name>::borrow(actual), #match_pattern) {
                    self.failure(::fest_assertions::FailureKind::Type).fail(
                        "expected:<{}> but was:<{}>",
                        &[
                            &::fest_assertions::formatting::Unquoted(
                                concat!(stringify!(#class_name), "::", stringify!(#variant_name))
                            ),
                            actual,
                        ],
                    );
                }

                self
            }
        }
    });

    quote! {
        #vis trait #assertions_name {
            #(#is_funs)*
        }

        impl<T> #assertions_name for ::fest_assertions::GenericAssert<T>
        where T: ::std::borrow::Borrow<#class_name> + ::std::fmt::Debug
        {
            #(#impl_funs)*
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_to_snake() {
        assert_eq!(pascal_case_to_snake_case("Some"), "some");
    }

    #[test]
    fn double_words_to_snake() {
        assert_eq!(pascal_case_to_snake_case("SomeWord"), "some_word");
    }

    #[test]
    fn generates_one_method_per_variant() {
        let generated = impl_enum_assertions(quote! {
            pub enum Light { Red, AmberFlashing(u8), Green { seconds: u32 } }
        })
        .to_string();

        assert!(generated.contains("pub trait LightAssertions"));
        assert!(generated.contains("fn is_red"));
        assert!(generated.contains("fn is_amber_flashing"));
        assert!(generated.contains("fn is_green"));
    }

    #[test]
    fn generic_enums_are_rejected() {
        let generated = impl_enum_assertions(quote! {
            enum Wrapper<T> { Value(T) }
        })
        .to_string();

        assert!(generated.contains("compile_error"));
    }
}
