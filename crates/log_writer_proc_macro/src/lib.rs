use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, Pat};

#[derive(Eq, PartialEq)]
enum ProcLogLevel {
    Trace,
    Debug,
}

// #[log(trace)] or #[log(debug)]
//
// #[log(trace)] logs the function arguments and return value through
// `log_writer::trace!`; parameters and return type must implement Debug.
//
// #[log(debug)] logs the function arguments and their types through
// `log_writer::debug!`.
//
// Note: unless the global writer emits Trace (master switch and trace gate
// both on), #[log(trace)] falls back to the #[log(debug)] output and never
// formats argument or return values.
//
// The annotated crate must depend on `log_writer`.

#[proc_macro_attribute]
pub fn log(attr: TokenStream, item: TokenStream) -> TokenStream {
    let log_level = match attr.to_string().trim_matches('"').to_lowercase().as_str() {
        "trace" => ProcLogLevel::Trace,
        "debug" => ProcLogLevel::Debug,
        other => {
            let message = format!("invalid log level `{}`, expected `trace` or `debug`", other);
            return syn::Error::new(Span::call_site(), message)
                .to_compile_error()
                .into();
        }
    };

    let input_fn: ItemFn = parse_macro_input!(item as ItemFn);
    let fn_name = &input_fn.sig.ident;
    let args = &input_fn.sig.inputs;
    let is_async = input_fn.sig.asyncness.is_some();
    let fn_block = &input_fn.block;

    let log_args_type = args.iter().filter_map(|arg| {
        if let FnArg::Typed(pat_type) = arg {
            if let Pat::Ident(ref pat_ident) = *pat_type.pat {
                let pat_ident = &pat_ident.ident;
                let pat_type = &pat_type.ty;
                Some(quote! { format!("{}: {}", stringify!(#pat_ident), stringify!(#pat_type)) })
            } else {
                None
            }
        } else {
            None
        }
    });

    let log_args_value = args.iter().filter_map(|arg| {
        if let FnArg::Typed(pat_type) = arg {
            if let Pat::Ident(ref pat_ident) = *pat_type.pat {
                let pat_ident = &pat_ident.ident;
                Some(quote! { format!("{}: {:?}", stringify!(#pat_ident), #pat_ident) })
            } else {
                None
            }
        } else {
            None
        }
    });

    // "(a: i32, b: &str)"
    let log_args_type = quote! {
        {
            let parts: &[::std::string::String] = &[#(#log_args_type),*];
            format!("({})", parts.join(", "))
        }
    };
    // "(a: 1, b: \"x\")"
    let log_args_value = quote! {
        {
            let parts: &[::std::string::String] = &[#(#log_args_value),*];
            format!("({})", parts.join(", "))
        }
    };

    let call_original_fn = if is_async {
        quote! { let result = (async move #fn_block).await; }
    } else {
        quote! { let result = (move || #fn_block)(); }
    };

    let module_path = quote! { module_path!() };

    let (log_enter, log_exit) = match log_level {
        ProcLogLevel::Trace => (
            quote! {
                if ::log_writer::get_state().emits(::log_writer::Level::Trace) {
                    ::log_writer::trace!("Function call {}::{}{}", #module_path, stringify!(#fn_name), #log_args_value);
                } else {
                    ::log_writer::debug!("Function call {}::{}{}", #module_path, stringify!(#fn_name), #log_args_type);
                }
            },
            quote! {
                if ::log_writer::get_state().emits(::log_writer::Level::Trace) {
                    ::log_writer::trace!("Function {}::{} returned: {:?}", #module_path, stringify!(#fn_name), result);
                } else {
                    ::log_writer::debug!("Function {}::{} returned.", #module_path, stringify!(#fn_name));
                }
            }
        ),
        ProcLogLevel::Debug => (
            quote! { ::log_writer::debug!("Function call {}::{}{}", #module_path, stringify!(#fn_name), #log_args_type); },
            quote! { ::log_writer::debug!("Function {}::{} returned.", #module_path, stringify!(#fn_name)); }
        ),
    };

    let attributes = &input_fn.attrs;
    let visibility = &input_fn.vis;
    let signature = &input_fn.sig;

    let expanded = quote! {
        #(#attributes)* #visibility #signature {
            #log_enter
            #call_original_fn
            #log_exit
            result
        }
    };

    TokenStream::from(expanded)
}
