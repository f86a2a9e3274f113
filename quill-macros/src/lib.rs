//! Compile-time templates for `quill`
//!
//! `quill::str!("name", "template")` compiles the template while the crate is
//! being built. Syntax errors are reported at the template literal. On success
//! it expands to a function that binds the precompiled tree to an engine:
//!
//! ```ignore
//! quill::str!("greeting", "Hello {{ name }}!");
//! // pub fn greeting(engine: &quill::Engine) -> quill::Template
//! ```

use proc_macro::TokenStream;
use quill_parser::{Compiler, Node};
use quote::quote;
use syn::{Ident, LitStr, Token, parse::Parse, parse::ParseStream, parse_macro_input};

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            for lc in c.to_lowercase() {
                result.push(lc);
            }
        } else {
            result.push(c);
        }
    }
    result
}

/// Builds the expression that reconstructs `node` at runtime
fn node_tokens(node: &Node) -> proc_macro2::TokenStream {
    match node {
        Node::Literal(text) => quote! {
            ::quill::parser::Node::Literal(::std::string::String::from(#text))
        },
        Node::Lookup(key) => quote! {
            ::quill::parser::Node::Lookup(::std::string::String::from(#key))
        },
        Node::Call { name, args, body } => {
            let body = match body {
                Some(body) => {
                    let body = node_tokens(body);
                    quote! { ::std::option::Option::Some(::std::boxed::Box::new(#body)) }
                }
                None => quote! { ::std::option::Option::None },
            };
            quote! {
                ::quill::parser::Node::Call {
                    name: ::std::string::String::from(#name),
                    args: ::std::vec![#(::std::string::String::from(#args)),*],
                    body: #body,
                }
            }
        }
        Node::Concat(nodes) => {
            let nodes = nodes.iter().map(node_tokens);
            quote! { ::quill::parser::Node::Concat(::std::vec![#(#nodes),*]) }
        }
    }
}

fn generate_code_for_content(name: &LitStr, content: &LitStr) -> proc_macro2::TokenStream {
    let method_name = to_snake_case(&name.value().replace('-', "_"));
    let method_name = match syn::parse_str::<Ident>(&method_name) {
        Ok(ident) => ident,
        Err(_) => {
            return syn::Error::new(
                name.span(),
                format!("template name {:?} is not a valid function name", name.value()),
            )
            .to_compile_error();
        }
    };
    let root = match Compiler::new().compile_str(&content.value()) {
        Ok(root) => root,
        Err(err) => {
            return syn::Error::new(content.span(), format!("invalid template: {}", err))
                .to_compile_error();
        }
    };
    let tree = node_tokens(&root);
    quote! {
        pub fn #method_name(engine: &::quill::Engine) -> ::quill::Template {
            engine.template(#tree)
        }
    }
}

struct StrInput {
    name: LitStr,
    content: LitStr,
}

impl Parse for StrInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: LitStr = input.parse()?;
        input.parse::<Token![,]>()?;
        let content: LitStr = input.parse()?;
        Ok(StrInput { name, content })
    }
}

#[proc_macro]
pub fn quill_str(input: TokenStream) -> TokenStream {
    let StrInput { name, content } = parse_macro_input!(input as StrInput);
    TokenStream::from(generate_code_for_content(&name, &content))
}
