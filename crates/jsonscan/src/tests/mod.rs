mod property_strings;
