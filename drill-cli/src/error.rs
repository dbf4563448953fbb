error_chain! {
    links {
        Drill(::drill::error::Error, ::drill::error::ErrorKind);
    }

    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
        Clap(::clap::Error);
    }
}
