pub mod site_page;
