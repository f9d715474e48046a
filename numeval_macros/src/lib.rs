use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, PatType, Type};

fn formatted_arg_error_msg(arg_pos: usize, fn_name: &str) -> String {
    format!(
        "Expected argument {} of {} to be a plain `name: f64` binding",
        arg_pos, fn_name
    )
}

fn is_f64(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map_or(false, |segment| segment.ident == "f64"),
        _ => false,
    }
}

/// Turns `fn name(x: f64) -> Result<f64, EvalError>` into an evaluator
/// function taking `(f64, &mut dyn Any)`.
///
/// A second parameter is kept as the user-data binding when present, so
/// `fn scaled(x: f64, user_data: &mut dyn Any)` can reach host state.
#[proc_macro_attribute]
pub fn eval_fn(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    let fn_attrs = &input.attrs;
    let fn_vis = &input.vis;
    let fn_name = &input.sig.ident;
    let fn_args = &input.sig.inputs;
    let fn_body = &input.block;
    let fn_output = &input.sig.output;

    if fn_args.is_empty() || fn_args.len() > 2 {
        panic!(
            "{} must take one f64 argument and an optional user-data argument, got {}",
            fn_name,
            fn_args.len()
        );
    }

    let mut args = fn_args.iter();

    let arg_name = match args.next() {
        Some(FnArg::Typed(PatType { pat, ty, .. })) if is_f64(ty) => match **pat {
            syn::Pat::Ident(ref ident) => ident.ident.clone(),
            _ => panic!("{}", formatted_arg_error_msg(0, &fn_name.to_string())),
        },
        _ => panic!("{}", formatted_arg_error_msg(0, &fn_name.to_string())),
    };

    let user_data: TokenStream2 = match args.next() {
        Some(FnArg::Typed(PatType { pat, .. })) => match **pat {
            syn::Pat::Ident(ref ident) => {
                let ident = &ident.ident;
                quote! { #ident }
            }
            syn::Pat::Wild(_) => quote! { _ },
            _ => panic!("Unsupported user-data pattern in {}", fn_name),
        },
        Some(FnArg::Receiver(_)) => panic!("{} cannot take self", fn_name),
        None => quote! { _user_data },
    };

    let expanded = quote! {
        #(#fn_attrs)*
        #fn_vis fn #fn_name(#arg_name: f64, #user_data: &mut dyn ::std::any::Any) #fn_output {
            #fn_body
        }
    };

    TokenStream::from(expanded)
}
